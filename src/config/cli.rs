use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "agri-advisory")]
#[command(about = "Crop disease advisory reports generated by a hosted language model")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit log lines as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Serve the advisory form over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(short, long, default_value = "8501")]
        port: u16,
    },
    /// Ask for one advisory report in the terminal
    Ask {
        /// Crop or plant name, prompted for when omitted
        #[arg(long)]
        plant: Option<String>,

        /// Disease or problem, prompted for when omitted
        #[arg(long)]
        issue: Option<String>,
    },
}
