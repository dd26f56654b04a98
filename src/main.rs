mod args;
mod buffer;
mod config;
mod entry;
mod error;
mod fade;
mod fragment;
mod ingest;
mod layout;
mod logger;
mod merge;
mod sender;
mod shutdown;
mod shutdown_handlers;
mod surface;
mod ui;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
