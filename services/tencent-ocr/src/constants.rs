pub const HOST: &str = "ocr.tencentcloudapi.com";
pub const ENDPOINT: &str = "https://ocr.tencentcloudapi.com/";
pub const SERVICE: &str = "ocr";
pub const ACTION_ID_CARD_OCR: &str = "IDCardOCR";
pub const VERSION: &str = "2018-11-19";
pub const DEFAULT_REGION: &str = "ap-guangzhou";
