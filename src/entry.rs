use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::{Command, DEFAULT_HEADLESS_WIDTH, OverlayArgs, SendArgs};
use crate::error::AppResult;
use crate::fade::FadeTimings;
use crate::ingest::{IngestServer, IngestSettings};
use crate::logger::{LogTarget, init_logging};
use crate::shutdown_handlers::{
    setup_keyboard_shutdown_handler, setup_signal_shutdown_handler, shutdown_channel,
};
use crate::surface::LogSurface;
use crate::ui::{TerminalGuard, TerminalSurface, Ui, UiActions};

enum RunPlan {
    Send(SendArgs),
    Overlay(OverlayPlan),
}

struct OverlayPlan {
    settings: IngestSettings,
    width: Option<usize>,
    no_ui: bool,
    no_color: bool,
}

impl OverlayPlan {
    fn from_args(args: &OverlayArgs) -> Self {
        Self {
            settings: IngestSettings {
                bind: args.bind,
                capacity: args.capacity,
                tail: args.tail,
                max_lines: args.max_lines,
                timings: FadeTimings {
                    fade_in: args.fade_in,
                    hide_after: args.hide_after,
                    fade_out: args.fade_out,
                    frame_interval: args.frame_interval,
                },
            },
            width: args.width.map(usize::from),
            no_ui: args.no_ui,
            no_color: args.no_color,
        }
    }
}

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;
    if let Some(config) = crate::config::load_config(args.config.as_deref())? {
        crate::config::apply_config(&mut args, &matches, &config)?;
    }

    let plan = build_plan(args.clone());
    let target = match (&plan, args.log_file.as_deref()) {
        (_, Some(path)) => LogTarget::File(path),
        (RunPlan::Overlay(overlay), None) if !overlay.no_ui => LogTarget::StderrQuiet,
        (RunPlan::Overlay(_) | RunPlan::Send(_), None) => LogTarget::Stderr,
    };
    init_logging(args.verbose, args.no_color, target)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(execute_plan(plan))
}

fn parse_args() -> AppResult<(OverlayArgs, ArgMatches)> {
    let matches = OverlayArgs::command().get_matches();
    let args = OverlayArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn build_plan(mut args: OverlayArgs) -> RunPlan {
    match args.command.take() {
        Some(Command::Send(send_args)) => RunPlan::Send(send_args),
        None => RunPlan::Overlay(OverlayPlan::from_args(&args)),
    }
}

async fn execute_plan(plan: RunPlan) -> AppResult<()> {
    let (shutdown_tx, _) = shutdown_channel();
    let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);

    let result = match plan {
        RunPlan::Send(args) => crate::sender::run_send(&args, &shutdown_tx)
            .await
            .map(drop),
        RunPlan::Overlay(overlay) => run_overlay(overlay, &shutdown_tx).await,
    };

    drop(shutdown_tx.send(()));
    if let Err(err) = signal_handle.await {
        tracing::warn!("Signal handler task failed: {}", err);
    }
    result
}

async fn run_overlay(
    plan: OverlayPlan,
    shutdown_tx: &crate::shutdown::ShutdownSender,
) -> AppResult<()> {
    let server = IngestServer::bind(plan.settings).await?;

    if plan.no_ui {
        let surface = LogSurface::new(plan.width.unwrap_or(DEFAULT_HEADLESS_WIDTH));
        server.run(surface, shutdown_tx).await?;
        return Ok(());
    }

    let terminal = Ui::setup_terminal()?;
    let _guard = TerminalGuard;
    let keyboard_handle = setup_keyboard_shutdown_handler(shutdown_tx);
    let surface = TerminalSurface::new(terminal, plan.width, plan.no_color);

    let result = server.run(surface, shutdown_tx).await;
    drop(shutdown_tx.send(()));
    if let Err(err) = keyboard_handle.await {
        tracing::warn!("Keyboard handler task failed: {}", err);
    }
    result.map(drop)
}
