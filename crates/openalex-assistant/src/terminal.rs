//! Interactive terminal front-end.
//!
//! Reads research questions line by line from stdin and prints the rendered
//! markdown outcome. Errors are printed and the loop continues; EOF ends the
//! session.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::config::limits;
use crate::formatters;
use crate::pipeline::ResearchPipeline;

/// Answer a single research question and print the result.
///
/// # Errors
///
/// Returns error on I/O failure or when the pipeline fails.
pub async fn run_once(pipeline: &ResearchPipeline, query: &str) -> anyhow::Result<()> {
    let outcome = pipeline.run(query, limits::PER_PAGE_TERMINAL).await?;

    let mut stdout = tokio::io::stdout();
    stdout.write_all(formatters::format_outcome(&outcome).as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}

/// Run the interactive query loop until stdin closes.
///
/// # Errors
///
/// Returns error on I/O failure. Pipeline failures are printed per query and
/// do not end the loop.
pub async fn run_interactive(pipeline: &ResearchPipeline) -> anyhow::Result<()> {
    let stdin = tokio::io::stdin();
    let mut stdout = tokio::io::stdout();
    let mut reader = BufReader::new(stdin);
    let mut line = String::new();

    stdout
        .write_all(b"Ask a research question and get a cited summary. Ctrl-D quits.\n")
        .await?;

    loop {
        stdout.write_all(b"\nquery> ").await?;
        stdout.flush().await?;

        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;
        if bytes_read == 0 {
            // EOF
            stdout.write_all(b"\n").await?;
            break;
        }

        let query = line.trim();
        if query.is_empty() {
            continue;
        }

        match pipeline.run(query, limits::PER_PAGE_TERMINAL).await {
            Ok(outcome) => {
                stdout.write_all(formatters::format_outcome(&outcome).as_bytes()).await?;
            }
            Err(err) => {
                stdout.write_all(format!("An error occurred: {err}\n").as_bytes()).await?;
            }
        }
        stdout.flush().await?;
    }

    Ok(())
}
