use jee_mock_test::TestApp;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "JEE Mock Test",
        options,
        Box::new(|_cc| Ok(Box::new(TestApp::new()))),
    )
}
