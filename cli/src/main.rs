//! tabstops CLI - inspect and edit paragraph tab stops

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;

use tabstops::{
    render, DisplayUnit, Document, JsonFormat, Length, NodeId, RenderOptions, TabAlignment,
    TabLeader,
};

#[derive(Parser)]
#[command(name = "tabstops")]
#[command(version)]
#[command(about = "Inspect and edit paragraph tab stops in document snapshots", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty document snapshot
    New {
        /// Output snapshot file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Number of empty paragraphs to create
        #[arg(short, long, default_value = "1")]
        paragraphs: usize,

        /// Paragraph style ids to create
        #[arg(long = "style", value_name = "ID")]
        styles: Vec<String>,
    },

    /// List the tab stops of a paragraph or style
    #[command(alias = "ls")]
    List {
        /// Document snapshot file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        target: Target,

        /// Unit for positions
        #[arg(long, value_enum, env = "TABSTOPS_UNIT", default_value = "inches")]
        unit: Unit,

        /// Output JSON instead of text
        #[arg(long)]
        json: bool,

        /// Output compact JSON
        #[arg(long, requires = "json")]
        compact: bool,
    },

    /// Add a tab stop in position order
    Add {
        /// Document snapshot file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        target: Target,

        /// Position (e.g., "1.75in", "2cm", "36pt", "720tw")
        #[arg(long, allow_hyphen_values = true)]
        position: Length,

        /// Alignment (unset if omitted)
        #[arg(long, value_enum)]
        alignment: Option<Alignment>,

        /// Leader (none if omitted)
        #[arg(long, value_enum)]
        leader: Option<Leader>,
    },

    /// Remove the tab stop at an index
    #[command(alias = "rm")]
    Remove {
        /// Document snapshot file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        target: Target,

        /// Index of the tab stop (0-based)
        #[arg(long)]
        index: usize,
    },

    /// Remove all tab stops
    Clear {
        /// Document snapshot file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        target: Target,
    },

    /// Show version information
    Version,
}

/// Which paragraph or style to operate on.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct Target {
    /// Paragraph index (0-based)
    #[arg(short, long)]
    paragraph: Option<usize>,

    /// Paragraph style id
    #[arg(short, long)]
    style: Option<String>,
}

impl Target {
    fn resolve(&self, doc: &Document) -> tabstops::Result<NodeId> {
        match (&self.style, self.paragraph) {
            (Some(style), _) => doc.style(style),
            (None, Some(index)) => doc.paragraph(index),
            (None, None) => doc.paragraph(0),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Unit {
    /// English Metric Units
    Emu,
    /// Twentieths of a point
    Twips,
    /// Inches
    Inches,
    /// Centimeters
    Cm,
    /// Points
    Pt,
}

impl From<Unit> for DisplayUnit {
    fn from(unit: Unit) -> Self {
        match unit {
            Unit::Emu => DisplayUnit::Emu,
            Unit::Twips => DisplayUnit::Twips,
            Unit::Inches => DisplayUnit::Inches,
            Unit::Cm => DisplayUnit::Centimeters,
            Unit::Pt => DisplayUnit::Points,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Alignment {
    Left,
    Center,
    Right,
    Decimal,
    Bar,
    List,
    Clear,
    End,
    Start,
}

impl From<Alignment> for TabAlignment {
    fn from(alignment: Alignment) -> Self {
        match alignment {
            Alignment::Left => TabAlignment::Left,
            Alignment::Center => TabAlignment::Center,
            Alignment::Right => TabAlignment::Right,
            Alignment::Decimal => TabAlignment::Decimal,
            Alignment::Bar => TabAlignment::Bar,
            Alignment::List => TabAlignment::List,
            Alignment::Clear => TabAlignment::Clear,
            Alignment::End => TabAlignment::End,
            Alignment::Start => TabAlignment::Start,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Leader {
    /// Blank span
    Spaces,
    /// Dotted
    Dots,
    /// Dashed
    Dashes,
    /// Solid line
    Lines,
    /// Heavy solid line
    Heavy,
    /// Centered dots
    MiddleDot,
}

impl From<Leader> for TabLeader {
    fn from(leader: Leader) -> Self {
        match leader {
            Leader::Spaces => TabLeader::Spaces,
            Leader::Dots => TabLeader::Dots,
            Leader::Dashes => TabLeader::Dashes,
            Leader::Lines => TabLeader::Lines,
            Leader::Heavy => TabLeader::Heavy,
            Leader::MiddleDot => TabLeader::MiddleDot,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::New {
            file,
            paragraphs,
            styles,
        } => cmd_new(&file, paragraphs, &styles),
        Commands::List {
            file,
            target,
            unit,
            json,
            compact,
        } => cmd_list(&file, &target, unit, json, compact),
        Commands::Add {
            file,
            target,
            position,
            alignment,
            leader,
        } => cmd_add(&file, &target, position, alignment, leader),
        Commands::Remove {
            file,
            target,
            index,
        } => cmd_remove(&file, &target, index),
        Commands::Clear { file, target } => cmd_clear(&file, &target),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load(file: &Path) -> tabstops::Result<Document> {
    log::debug!("loading snapshot {}", file.display());
    Document::open(file)
}

fn cmd_new(
    file: &Path,
    paragraphs: usize,
    styles: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = Document::new();
    for _ in 0..paragraphs {
        doc.add_paragraph()?;
    }
    for style in styles {
        doc.add_paragraph_style(style)?;
    }
    doc.save(file)?;

    println!("{} {}", "Created".green(), file.display());
    Ok(())
}

fn cmd_list(
    file: &Path,
    target: &Target,
    unit: Unit,
    json: bool,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load(file)?;
    let owner = target.resolve(&doc)?;
    let stops = doc.tab_stops(owner)?;

    if json {
        let format = if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        println!("{}", render::to_json(&stops, format)?);
        return Ok(());
    }

    if stops.is_empty() {
        println!("{}", "No tab stops".dimmed());
        return Ok(());
    }

    let options = RenderOptions::new().with_unit(unit.into());
    println!("{}", render::to_text(&stops, &options)?);
    Ok(())
}

fn cmd_add(
    file: &Path,
    target: &Target,
    position: Length,
    alignment: Option<Alignment>,
    leader: Option<Leader>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = load(file)?;
    let owner = target.resolve(&doc)?;

    let index = {
        let mut stops = doc.tab_stops_mut(owner)?;
        let node = stops
            .add_with(position, alignment.map(Into::into), leader.map(Into::into))?
            .node_id();
        stops
            .iter()
            .position(|stop| stop.node_id() == node)
            .unwrap_or_default()
    };
    doc.save(file)?;

    println!(
        "{} tab stop at {} (index {})",
        "Added".green(),
        RenderOptions::new().format_length(position),
        index
    );
    Ok(())
}

fn cmd_remove(
    file: &Path,
    target: &Target,
    index: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = load(file)?;
    let owner = target.resolve(&doc)?;
    doc.tab_stops_mut(owner)?.remove(index)?;
    doc.save(file)?;

    println!("{} tab stop {}", "Removed".green(), index);
    Ok(())
}

fn cmd_clear(file: &Path, target: &Target) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = load(file)?;
    let owner = target.resolve(&doc)?;
    let count = {
        let mut stops = doc.tab_stops_mut(owner)?;
        let count = stops.len();
        stops.clear()?;
        count
    };
    doc.save(file)?;

    println!("{} {} tab stops", "Cleared".green(), count);
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "tabstops".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Paragraph tab stop editor");
}
