//! OpenAlex Research Assistant
//!
//! Takes a natural-language research question, distills search keywords with
//! a hosted LLM, searches the OpenAlex works API, rebuilds inverted-index
//! abstracts into readable text, and synthesizes a structured summary citing
//! the retrieved papers.
//!
//! The pipeline is one shared library consumed by two thin adapters: an HTTP
//! JSON API and an interactive terminal session.
//!
//! # Example
//!
//! ```no_run
//! use openalex_assistant::{Config, ResearchPipeline};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let pipeline = ResearchPipeline::new(&config)?;
//!
//!     let outcome = pipeline.run("How does sleep affect memory consolidation?", 5).await?;
//!     println!("{}", outcome.summary);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod pipeline;
pub mod server;
pub mod terminal;

pub use client::{CompletionClient, OpenAlexClient};
pub use config::Config;
pub use error::{ClientError, PipelineError};
pub use pipeline::{ResearchOutcome, ResearchPipeline};
