//! 핵심 변환 로직을 라이브러리로 분리하여 CLI 뿐 아니라 다른 화면에서도 재사용한다.

pub mod app;
pub mod calc;
pub mod category;
pub mod config;
pub mod conversion;
pub mod format;
pub mod formula;
pub mod history;
pub mod i18n;
pub mod material_db;
pub mod registry;
pub mod ui_cli;
pub mod units;
