use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use axum_server::Handle;
use clap::{Parser, Subcommand};
use log::{debug, error, info};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use fauxgen::commands::{generate_batch, Command, ConcreteCommander};
use fauxgen::generators::{self, GeneratorType};
use fauxgen::rest::{self, state::AppState};
use fauxgen::statics::shutdown::{shutdown_token, trigger_shutdown};
use fauxgen::threads::{ConcreteHandler, Handler};
use fauxgen::{with_thread_sampler, GenError, Sampler, Tables};

#[derive(OpenApi)]
#[openapi(
    paths(rest::generate::generate, rest::tables::get_tables),
    components(schemas(
        generators::GeneratorType,
        generators::GenerateRequest,
        generators::GeneratedValue,
        generators::StringKind,
        generators::IpPrefix,
        generators::TimeRecord,
        fauxgen::Tables,
        rest::command::ApiResponse<Vec<generators::GeneratedValue>>,
        rest::command::ApiResponse<fauxgen::Tables>,
    )),
    tags(
        (name = "generate", description = "Random value generation"),
        (name = "tables", description = "Lookup tables used by the generators")
    ),
    info(
        title = "Fauxgen API",
        version = "1.0.0",
        description = "REST API for randomised, format-constrained test data"
    )
)]
struct ApiDoc;

#[derive(Parser)]
#[command(version, about = "Randomised, format-constrained test data")]
struct Cli {
    /// YAML file overriding the built-in lookup tables
    #[arg(long, global = true, env = "FAUXGEN_TABLES")]
    tables: Option<PathBuf>,

    #[command(subcommand)]
    command: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// Serve the HTTP API
    Serve {
        #[arg(long, env = "FAUXGEN_PORT", default_value_t = 3000)]
        port: u16,
    },
    /// Print generated values as JSON lines
    Generate {
        /// Generator as JSON, e.g. '{"type": "ipaddr", "ipv6": true}'
        spec: String,
        #[arg(long, short, default_value_t = 1)]
        count: usize,
    },
}

fn load_tables(path: Option<&Path>) -> Result<Tables, GenError> {
    match path {
        Some(path) => Tables::from_yaml_file(path),
        None => Ok(Tables::default()),
    }
}

fn run_generate(tables: &Tables, spec: &str, count: usize) -> Result<(), GenError> {
    let generator: GeneratorType =
        serde_json::from_str(spec).map_err(|e| GenError::InvalidArgument(e.to_string()))?;
    let values = with_thread_sampler(|sampler| generate_batch(&generator, sampler, tables, count))?;
    for value in values {
        let line = serde_json::to_string(&value).map_err(|e| GenError::Config(e.to_string()))?;
        println!("{line}");
    }
    Ok(())
}

async fn serve(tables: Tables, port: u16) {
    let (tx, rx) = mpsc::channel::<Command>(128);
    let app_state = AppState { command_tx: tx };

    let commander = ConcreteCommander::new(Sampler::from_entropy(), tables);

    if let Err(e) = ctrlc::set_handler(trigger_shutdown) {
        error!("Error setting Ctrl-C handler: {}", e);
    }

    tokio::spawn(async move {
        let mut handler = ConcreteHandler::new(commander, rx);
        handler.main_loop().await;
    });

    let app = Router::new()
        .route("/api/v1/generate", post(rest::generate::generate))
        .route("/api/v1/tables", get(rest::tables::get_tables))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let handle: Handle<SocketAddr> = Handle::new();
    info!("Listening on http://{}", addr);

    tokio::spawn(shutdown_axum(shutdown_token(), handle.clone()));

    if let Err(e) = axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await
    {
        error!("Server error: {}", e);
    }
    info!("Shutting down");
}

async fn shutdown_axum(token: CancellationToken, handle: Handle<SocketAddr>) {
    token.cancelled().await;
    debug!("Shutting down axum server.");
    handle.graceful_shutdown(Some(Duration::from_secs(10)));
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let tables = match load_tables(cli.tables.as_deref()) {
        Ok(tables) => tables,
        Err(e) => {
            error!("{}", e);
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Mode::Serve { port } => {
            info!("Starting up");
            serve(tables, port).await;
            ExitCode::SUCCESS
        }
        Mode::Generate { spec, count } => match run_generate(&tables, &spec, count) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        },
    }
}
