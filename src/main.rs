use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use unit_converter_toolbox::app::{self, AppError, Session};
use unit_converter_toolbox::calc::density::{self, DensityQuery, Measure};
use unit_converter_toolbox::calc::mixture::RatioKind;
use unit_converter_toolbox::category::Category;
use unit_converter_toolbox::config::{self, Config, DEFAULT_CONFIG_PATH};
use unit_converter_toolbox::formula;
use unit_converter_toolbox::i18n::{self, keys, Translator};
use unit_converter_toolbox::material_db;
use unit_converter_toolbox::ui_cli;

#[derive(Parser)]
#[command(name = "unit_converter_toolbox", version)]
#[command(about = "Unit Converter Toolbox - length, area, volume, weight, data, density, temperature", long_about = None)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 표시 언어 (ko, en, auto)
    #[arg(long, global = true)]
    lang: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// 값을 다른 단위로 변환한다
    Convert {
        /// length, area, volume, weight, digital-storage, digital-transfer, density, temperature
        category: Category,
        /// 변환할 값
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// 입력 단위 코드
        from: String,
        /// 변환 단위 코드
        to: String,
        /// 변환 기록에 남긴다
        #[arg(long)]
        save: bool,
        /// 즐겨찾기에 추가한다
        #[arg(long)]
        favorite: bool,
    },
    /// 카테고리의 단위 목록
    Units { category: Category },
    /// 두 단위 사이의 환산식
    Formula {
        category: Category,
        from: String,
        to: String,
    },
    /// 밀도·질량·부피 중 하나를 구한다
    Density {
        #[arg(long, value_enum)]
        solve: SolveFor,
        #[arg(long, allow_hyphen_values = true)]
        mass: Option<f64>,
        #[arg(long, default_value = "kg")]
        mass_unit: String,
        #[arg(long, allow_hyphen_values = true)]
        volume: Option<f64>,
        #[arg(long, default_value = "m3")]
        volume_unit: String,
        #[arg(long, allow_hyphen_values = true)]
        density: Option<f64>,
        #[arg(long, default_value = "kg_m3")]
        density_unit: String,
        /// 밀도 대신 참고 물질 이름 (water, steel ...)
        #[arg(long, conflicts_with = "density")]
        material: Option<String>,
        /// 결과 단위 코드 (생략 시 kg, m3, kg_m3)
        #[arg(long)]
        unit: Option<String>,
    },
    /// 배합비에 따라 목표 총량을 나눈다
    Mix {
        #[arg(long, value_enum, default_value = "parts")]
        kind: MixKind,
        #[arg(long)]
        total: f64,
        /// name=value 형식의 재료 목록
        #[arg(required = true)]
        ingredients: Vec<String>,
    },
    /// 카테고리의 변환 기록
    History {
        category: Category,
        /// 기록을 지운다
        #[arg(long)]
        clear: bool,
    },
    /// 카테고리의 즐겨찾기
    Favorites { category: Category },
    /// 대화형 메뉴 (기본값)
    Interactive,
}

#[derive(Clone, Copy, ValueEnum)]
enum SolveFor {
    Density,
    Mass,
    Volume,
}

#[derive(Clone, Copy, ValueEnum)]
enum MixKind {
    Parts,
    Percentage,
}

impl From<MixKind> for RatioKind {
    fn from(value: MixKind) -> Self {
        match value {
            MixKind::Parts => RatioKind::Parts,
            MixKind::Percentage => RatioKind::Percentage,
        }
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let cfg = config::load_or_default(&cli.config);
    let config_lang = cfg.as_ref().ok().and_then(|c| c.language.as_deref());
    let lang = i18n::resolve_language(cli.lang.as_deref(), config_lang);
    let tr = Translator::new_with_pack(&lang, None);
    let result = cfg
        .map_err(AppError::from)
        .and_then(|cfg| try_run(&cli, cfg, &tr));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn try_run(cli: &Cli, cfg: Config, tr: &Translator) -> Result<(), AppError> {
    let mut session = Session::from_config(cfg, &cli.config)?;
    let Some(command) = &cli.command else {
        return app::run(&mut session, tr);
    };
    match command {
        Commands::Convert {
            category,
            value,
            from,
            to,
            save,
            favorite,
        } => {
            let Some(outcome) = session.convert(*category, value, from, to)? else {
                println!("{}", tr.t(keys::ERROR_NO_RESULT));
                return Ok(());
            };
            ui_cli::print_outcome(tr, &outcome);
            if *save {
                session.record(&outcome)?;
            }
            if *favorite {
                let key = if session.add_favorite(&outcome)? {
                    keys::FAVORITE_ADDED
                } else {
                    keys::FAVORITE_EXISTS
                };
                println!("{}", tr.t(key));
            }
        }
        Commands::Units { category } => ui_cli::print_units(*category),
        Commands::Formula { category, from, to } => {
            println!("{}", formula::get_formula(*category, from, to)?);
            if let Some(symbolic) = formula::symbolic_formula(*category, from, to) {
                println!("{symbolic}");
            }
        }
        Commands::Density {
            solve,
            mass,
            mass_unit,
            volume,
            volume_unit,
            density,
            density_unit,
            material,
            unit,
        } => {
            let mass = mass.map(|v| Measure::new(v, mass_unit.as_str()));
            let volume = volume.map(|v| Measure::new(v, volume_unit.as_str()));
            let density = match material {
                Some(name) => {
                    let m = material_db::find_material(name).ok_or_else(|| {
                        AppError::InvalidInput(format!("알 수 없는 물질: {name}"))
                    })?;
                    Some(Measure::new(m.density_kg_m3, "kg_m3"))
                }
                None => density.map(|v| Measure::new(v, density_unit.as_str())),
            };
            let query = build_query(*solve, mass, volume, density, unit.clone())?;
            match density::solve(&query)? {
                Some(solution) => println!("{}", solution.equation),
                None => println!("{}", tr.t(keys::ERROR_NO_RESULT)),
            }
        }
        Commands::Mix {
            kind,
            total,
            ingredients,
        } => {
            let ingredients = ingredients
                .iter()
                .map(|raw| app::parse_ingredient(raw))
                .collect::<Result<Vec<_>, _>>()?;
            ui_cli::print_mixture(tr, &ingredients, (*kind).into(), *total);
        }
        Commands::History { category, clear } => {
            if *clear {
                session.clear_history(*category)?;
            }
            println!("{}", tr.t(keys::HISTORY_HEADING).trim_start());
            ui_cli::print_records(tr, *category, &session.history().get(*category));
        }
        Commands::Favorites { category } => {
            println!("{}", tr.t(keys::FAVORITES_HEADING).trim_start());
            ui_cli::print_records(tr, *category, &session.favorites().get(*category));
        }
        Commands::Interactive => app::run(&mut session, tr)?,
    }
    Ok(())
}

fn build_query(
    solve: SolveFor,
    mass: Option<Measure>,
    volume: Option<Measure>,
    density: Option<Measure>,
    unit: Option<String>,
) -> Result<DensityQuery, AppError> {
    let missing = |name: &str| AppError::InvalidInput(format!("--{name} 값이 필요합니다"));
    Ok(match solve {
        SolveFor::Density => DensityQuery::Density {
            mass: mass.ok_or_else(|| missing("mass"))?,
            volume: volume.ok_or_else(|| missing("volume"))?,
            unit: unit.unwrap_or_else(|| "kg_m3".into()),
        },
        SolveFor::Mass => DensityQuery::Mass {
            density: density.ok_or_else(|| missing("density"))?,
            volume: volume.ok_or_else(|| missing("volume"))?,
            unit: unit.unwrap_or_else(|| "kg".into()),
        },
        SolveFor::Volume => DensityQuery::Volume {
            mass: mass.ok_or_else(|| missing("mass"))?,
            density: density.ok_or_else(|| missing("density"))?,
            unit: unit.unwrap_or_else(|| "m3".into()),
        },
    })
}
