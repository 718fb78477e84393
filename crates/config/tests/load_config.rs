use fams_config::AppConfig;

#[test]
fn test_load_service_config_directory() {
    dotenvy::dotenv().ok();

    let config = AppConfig::load("../../services/am-asset/config").expect("config should load");

    assert_eq!(config.app_name, "am-asset");
    assert!(config.upload.max_photo_bytes > 0);
    assert!(!config.upload.allowed_photo_types.is_empty());
}
