//! 대화형 메뉴를 문자열 입력으로 구동하는 테스트.
use std::io;

use unit_converter_toolbox::app::{self, AppError, Session};
use unit_converter_toolbox::category::Category;
use unit_converter_toolbox::config::Config;
use unit_converter_toolbox::history::MemoryStore;
use unit_converter_toolbox::i18n::Translator;
use unit_converter_toolbox::ui_cli::{self, MenuChoice};

fn session() -> Session {
    Session::with_store(Config::default(), Box::new(MemoryStore::new())).unwrap()
}

#[test]
fn empty_input_selects_exit() {
    let tr = Translator::new("en-us");
    assert_eq!(ui_cli::main_menu(&tr, &mut io::empty()).unwrap(), MenuChoice::Exit);
}

#[test]
fn invalid_selection_is_retried_until_valid() {
    let tr = Translator::new("en-us");
    let mut input = "x\n\n3\n".as_bytes();
    assert_eq!(ui_cli::main_menu(&tr, &mut input).unwrap(), MenuChoice::Density);
}

#[test]
fn invalid_selection_then_eof_exits() {
    let tr = Translator::new("en-us");
    let mut input = "9\n".as_bytes();
    assert_eq!(ui_cli::main_menu(&tr, &mut input).unwrap(), MenuChoice::Exit);
}

#[test]
fn run_returns_on_closed_input() {
    let tr = Translator::new("en-us");
    let mut session = session();
    app::run_with(&mut session, &tr, &mut io::empty()).unwrap();
}

#[test]
fn run_returns_when_input_ends_inside_a_prompt() {
    let tr = Translator::new("en-us");
    let mut session = session();
    // 배합비 메뉴의 총량 입력 중에 끝난다
    let mut input = "4\n1\nabc\n".as_bytes();
    app::run_with(&mut session, &tr, &mut input).unwrap();
    // 카테고리 재입력 중에 끝난다
    let mut input = "2\nnot-a-category\n".as_bytes();
    app::run_with(&mut session, &tr, &mut input).unwrap();
}

#[test]
fn handlers_report_end_of_input() {
    let tr = Translator::new("en-us");
    assert!(matches!(
        ui_cli::handle_units(&tr, &mut io::empty()),
        Err(AppError::EndOfInput)
    ));
    assert!(matches!(
        ui_cli::handle_density(&tr, &mut "2\n".as_bytes()),
        Err(AppError::EndOfInput)
    ));
}

#[test]
fn scripted_conversion_is_recorded() {
    let tr = Translator::new("en-us");
    let mut session = session();
    let mut input = "1\n1\n5\nkm\nmi\ny\n0\n".as_bytes();
    app::run_with(&mut session, &tr, &mut input).unwrap();

    let history = session.history().get(Category::Length);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].from_unit, "km");
    assert_eq!(history[0].to_unit, "mi");
    assert_eq!(session.favorites().get(Category::Length).len(), 1);
}

#[test]
fn blank_units_fall_back_to_configured_defaults() {
    let tr = Translator::new("en-us");
    let mut session = session();
    let mut input = "4\n2\n\n\nn\n".as_bytes();
    ui_cli::handle_convert(&tr, &mut session, &mut input).unwrap();
    let history = session.history().get(Category::Weight);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].from_unit, "kg");
    assert_eq!(history[0].to_unit, "lb");
}
