#[test]
fn gui_config_defaults() {
    let config = launchdeck_gui::GuiConfig::default();
    assert_eq!(config.title, "Launchdeck");
    assert_eq!(config.width, 1280.0);
    assert_eq!(config.height, 800.0);
    assert_eq!(config.socket_path, "/tmp/launchdeck-backend.sock");
}
