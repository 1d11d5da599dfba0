mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kubedeck::config::{self, Config};
use kubedeck::models::{ResourceItem, ResourceKind, ResourceSnapshot};
use kubedeck::nav::{Route, Sidebar};
use kubedeck::page::{
    ConfigMaps, DerivedView, FetchState, Ingresses, NavigationLog, Nodes, Overview, Page, Pods,
    Resource, Secrets, Services, DEFAULT_NAMESPACE,
};
use kubedeck::{Backend, BackendClient};

#[derive(Parser, Debug)]
#[command(name = "kubedeck")]
#[command(about = "Kubernetes cluster dashboard client", long_about = None)]
struct Args {
    /// Base URL aggregation API backendu
    #[arg(long, env = "KUBEDECK_BACKEND_URL", default_value = config::DEFAULT_BACKEND_URL)]
    backend_url: String,

    /// Timeout jednoho requestu v sekundách
    #[arg(long, env = "KUBEDECK_TIMEOUT_SECS", default_value_t = config::DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Session cookie (`name=value` nebo jen hodnota)
    #[arg(long, env = "KUBEDECK_SESSION", hide_env_values = true)]
    session: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Zobrazí stránku jednoho druhu resource
    Show {
        #[arg(value_enum)]
        kind: ResourceKind,

        /// Namespace, pro který se počítají metriky a filtruje seznam
        #[arg(short, long, default_value = DEFAULT_NAMESPACE)]
        namespace: String,

        /// Před načtením invaliduj cache backendu
        #[arg(long)]
        refresh: bool,

        /// Rozbal detail řádku (pody, ingress)
        #[arg(long)]
        expand: Option<usize>,
    },
}

struct ShowOptions {
    namespace: String,
    refresh: bool,
    expand: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Inicializuj logging (stderr, stdout patří výpisu)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kubedeck=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let config = Config::new(
        &args.backend_url,
        Duration::from_secs(args.timeout),
        args.session,
    )
    .with_stored_session()?;
    tracing::debug!("Using backend {}", config.backend_url);

    let backend: Arc<dyn Backend> = Arc::new(BackendClient::new(&config)?);
    let navigator = Arc::new(NavigationLog::new());

    let Command::Show {
        kind,
        namespace,
        refresh,
        expand,
    } = args.command;
    let options = ShowOptions {
        namespace,
        refresh,
        expand,
    };

    let ok = match kind {
        ResourceKind::Overview => show_overview(backend, navigator.clone(), &options).await?,
        ResourceKind::Nodes => show_list::<Nodes, _>(backend, navigator.clone(), &options).await?,
        ResourceKind::Pods => show_list::<Pods, _>(backend, navigator.clone(), &options).await?,
        ResourceKind::Services => {
            show_list::<Services, _>(backend, navigator.clone(), &options).await?
        }
        ResourceKind::Ingress => {
            show_list::<Ingresses, _>(backend, navigator.clone(), &options).await?
        }
        ResourceKind::Secrets => show_list::<Secrets, _>(backend, navigator.clone(), &options).await?,
        ResourceKind::ConfigMaps => {
            show_list::<ConfigMaps, _>(backend, navigator.clone(), &options).await?
        }
    };

    if navigator.last() == Some(Route::Entry) {
        eprintln!(
            "Session expired. Upload your cluster config at {}{}",
            config.backend_url,
            Route::Entry.path()
        );
        return Ok(ExitCode::from(2));
    }

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Mount stránky (nebo jen refresh), výběr namespace a rozbalení
async fn prepare<R: Resource>(
    backend: Arc<dyn Backend>,
    navigator: Arc<NavigationLog>,
    options: &ShowOptions,
) -> Page<R> {
    // Refresh sám po invalidaci načte snapshot, mount by fetchnul navíc
    let page: Page<R> = if options.refresh {
        let page = Page::new(backend, navigator);
        page.refresh().await;
        page
    } else {
        Page::mount(backend, navigator).await
    };
    page.select_namespace(options.namespace.as_str());
    if let Some(index) = options.expand {
        page.toggle_expansion(index);
    }

    page
}

/// Společné větve stavu; vrací `Some(ok)` když není co dalšího vypsat
fn write_state<R: Resource>(out: &mut dyn Write, page: &Page<R>) -> Result<Option<bool>> {
    let sidebar = Sidebar::new(R::KIND);
    report::write_header(out, &sidebar, &page.namespace(), page.last_fetched())?;
    writeln!(out)?;

    match page.state() {
        FetchState::Ready(_) => Ok(None),
        FetchState::Failed(err) => {
            report::write_error(out, &err)?;
            Ok(Some(false))
        }
        FetchState::Empty | FetchState::Idle | FetchState::Loading => {
            report::write_no_data(out, R::KIND)?;
            Ok(Some(true))
        }
    }
}

async fn show_list<R, T>(
    backend: Arc<dyn Backend>,
    navigator: Arc<NavigationLog>,
    options: &ShowOptions,
) -> Result<bool>
where
    R: Resource<Snapshot = ResourceSnapshot<T>, View = DerivedView<T>>,
    T: ResourceItem,
{
    let page = prepare::<R>(backend, navigator, options).await;
    let mut out = std::io::stdout().lock();

    if let Some(ok) = write_state(&mut out, &page)? {
        return Ok(ok);
    }

    let snapshot = page.snapshot().context("Snapshot disappeared")?;
    let namespaces = page.namespaces();
    if R::KIND.is_namespaced() && !namespaces.iter().any(|ns| *ns == options.namespace) {
        tracing::debug!(
            "Namespace '{}' is not known to the backend ({})",
            options.namespace,
            namespaces.join(", ")
        );
    }

    if let Some(view) = page.view() {
        report::write_list(
            &mut out,
            R::KIND,
            &view,
            snapshot.running.is_some(),
            page.expansion(),
        )?;
    }
    Ok(true)
}

async fn show_overview(
    backend: Arc<dyn Backend>,
    navigator: Arc<NavigationLog>,
    options: &ShowOptions,
) -> Result<bool> {
    let page = prepare::<Overview>(backend, navigator, options).await;
    let mut out = std::io::stdout().lock();

    if let Some(ok) = write_state(&mut out, &page)? {
        return Ok(ok);
    }

    if let Some(view) = page.view() {
        report::write_overview(&mut out, &view)?;
    }
    Ok(true)
}
