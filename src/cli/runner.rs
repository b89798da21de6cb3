//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::collab::MemoryRowStore;
use crate::config::PaginationOptions;
use crate::controller::PaginationController;
use crate::error::{Error, Result, ResultExt};
use crate::http::HttpTransport;
use crate::pagination::{PageButtons, PaginationMode, PaginationState};
use crate::types::Row;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Window { page, max, count } => self.window(*page, *max, *count),
            Commands::Slice { file, size, page } => self.slice(file, *size, *page).await,
            Commands::Fetch {
                config,
                page,
                mode,
                url,
            } => self.fetch(config, *page, *mode, url.as_deref()).await,
        }
    }

    /// Show the button window for a page
    fn window(&self, page: u32, max: u32, count: u32) -> Result<()> {
        let mut state = PaginationState::new(PaginationMode::Local, 1, count);
        state.set_max_page(max);
        let page = state.validate_page(i64::from(page))?;
        state.goto(page);

        let buttons = PageButtons::from_state(&state);
        self.output_message(&json!({
            "type": "WINDOW",
            "page": state.page(),
            "max_page": state.max_page(),
            "pages": buttons.window(),
            "buttons": buttons,
        }));

        Ok(())
    }

    /// Show one page of local rows
    async fn slice(&self, file: &Path, size: u32, page: u32) -> Result<()> {
        let rows = load_rows(file)?;
        let options = PaginationOptions::new(PaginationMode::Local).with_page_size(size);
        options.validate()?;

        let mut controller =
            PaginationController::new(&options, Box::new(MemoryRowStore::with_rows(rows)))?;
        controller.set_max_rows(controller.store().data().len());
        controller.set_page(page).await?;

        let rows = controller.page_rows();
        self.output_page(&controller, &rows);
        Ok(())
    }

    /// Fetch rows from the configured endpoint
    async fn fetch(
        &self,
        config: &Path,
        page: u32,
        mode: Option<PaginationMode>,
        url: Option<&str>,
    ) -> Result<()> {
        let mut options = PaginationOptions::from_file(config)?;
        if let Some(mode) = mode {
            options.mode = mode;
        }
        if let Some(url) = url {
            options.url = Some(url.to_string());
        }

        if !options.mode.is_remote() {
            return Err(Error::config(format!(
                "Fetching requires a remote mode, got '{}'",
                options.mode
            )));
        }

        let endpoint = options
            .url
            .clone()
            .ok_or_else(|| Error::config("No endpoint configured (set 'url' or use --url)"))?;

        let transport = HttpTransport::with_config(endpoint, options.http.to_transport_config())?
            .with_params(options.params.clone());

        let mut controller =
            PaginationController::new(&options, Box::new(MemoryRowStore::default()))?
                .with_transport(Arc::new(transport));

        // Progressive modes always start from the first page
        let start = if controller.is_progressive() { 1 } else { page };
        controller.load_page(start).await?;

        info!(
            page = controller.page(),
            max_page = controller.max_page(),
            rows = controller.store().data().len(),
            "Fetch complete"
        );

        let rows = controller.page_rows();
        self.output_page(&controller, &rows);
        Ok(())
    }

    fn output_page(&self, controller: &PaginationController, rows: &[Row]) {
        self.output_message(&json!({
            "type": "PAGE",
            "mode": controller.mode(),
            "page": controller.page(),
            "max_page": controller.max_page(),
            "page_size": controller.page_size(),
            "rows": rows,
        }));
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

/// Read a JSON array of rows
fn load_rows(path: &Path) -> Result<Vec<Row>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read rows file '{}'", path.display()))?;

    match serde_json::from_str(&content)? {
        Value::Array(rows) => Ok(rows),
        other => Err(Error::config(format!(
            "Rows file must hold a JSON array, got {}",
            json_type(&other)
        ))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
