use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use glide_core::{
    create_go_to,
    dom::{Axis, Dom, ElementSpec, MemoryDocument},
    scroll::{offset::LAYOUT_TOP_PROPERTY, FrameScheduler, GoToOverrides, SteppedFrames, Target, TokioFrames},
    use_go_to, AppConfig, Locale, Scope,
};

const VIEWPORT_WIDTH: f64 = 1280.0;
const VIEWPORT_HEIGHT: f64 = 720.0;

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Selector of the element to scroll to (e.g. "#section-3")
    #[arg(long, conflicts_with = "offset", required_unless_present = "offset")]
    pub to: Option<String>,

    /// Raw scroll offset in pixels
    #[arg(long, allow_negative_numbers = true)]
    pub offset: Option<f64>,

    /// Scroll along the horizontal axis
    #[arg(long)]
    pub horizontal: bool,

    /// Right-to-left document
    #[arg(long)]
    pub rtl: bool,

    /// Animation duration in milliseconds
    #[arg(short = 'd', long)]
    pub duration: Option<u64>,

    /// Easing curve name
    #[arg(short = 'e', long)]
    pub easing: Option<String>,

    /// Pixels added to the computed target
    #[arg(long, allow_negative_numbers = true)]
    pub offset_adjust: Option<f64>,

    /// Fixed header height reported by every section; enables layout compensation
    #[arg(long)]
    pub layout_top: Option<u32>,

    /// Number of stacked sections in the generated document
    #[arg(long, default_value_t = 12)]
    pub sections: usize,

    /// Size of each section along the scroll axis
    #[arg(long, default_value_t = 800.0)]
    pub section_size: f64,

    /// Drive the animation in real time instead of a stepped clock
    #[arg(long)]
    pub realtime: bool,

    /// Print the frame trace as JSON
    #[arg(long)]
    pub json: bool,
}

impl SimulateArgs {
    fn target(&self) -> Target {
        match (&self.to, self.offset) {
            (Some(selector), _) => Target::from(selector.as_str()),
            (None, Some(offset)) => Target::from(offset),
            (None, None) => Target::from(0.0),
        }
    }

    fn axis(&self) -> Axis {
        Axis::from_horizontal(self.horizontal)
    }

    fn call_overrides(&self) -> GoToOverrides {
        let mut overrides = GoToOverrides::new();
        if let Some(duration) = self.duration {
            overrides = overrides.duration_ms(duration);
        }
        if let Some(easing) = &self.easing {
            overrides = overrides.easing(easing.as_str());
        }
        if let Some(offset) = self.offset_adjust {
            overrides = overrides.offset(offset);
        }
        if self.layout_top.is_some() {
            overrides = overrides.layout(true);
        }
        overrides
    }
}

#[derive(Debug, Serialize)]
pub struct FrameRecord {
    pub frame: usize,
    pub position: f64,
}

#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub target: String,
    pub axis: &'static str,
    pub rtl: bool,
    pub duration_ms: u64,
    pub easing: String,
    pub start: f64,
    pub frames: Vec<FrameRecord>,
    pub settled: f64,
}

/// Generate a document of `sections` stacked along the scroll axis
fn build_document(args: &SimulateArgs) -> MemoryDocument {
    let doc = MemoryDocument::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
    let extent = args.section_size * args.sections as f64;

    if args.horizontal {
        doc.set_document_size(extent, VIEWPORT_HEIGHT);
        if args.rtl {
            doc.update(doc.html(), |spec| spec.rtl = true);
        }
    } else {
        doc.set_document_size(VIEWPORT_WIDTH, extent);
    }

    for i in 0..args.sections {
        let position = args.section_size * i as f64;
        let mut spec = ElementSpec::new("section")
            .id(format!("section-{}", i))
            .class("section");
        spec = match (args.horizontal, args.rtl) {
            // Right-to-left content flows toward negative offsets
            (true, true) => spec.offset(-position, 0.0).size(args.section_size, VIEWPORT_HEIGHT),
            (true, false) => spec.offset(position, 0.0).size(args.section_size, VIEWPORT_HEIGHT),
            (false, _) => spec.offset(0.0, position).size(VIEWPORT_WIDTH, args.section_size),
        };
        if let Some(top) = args.layout_top {
            spec = spec.style(LAYOUT_TOP_PROPERTY, format!("{}px", top));
        }
        doc.append(doc.body(), spec);
    }

    doc
}

/// Run one scroll through the public facade and collect every frame
pub async fn simulate(config: &AppConfig, args: &SimulateArgs) -> Result<SimulationReport> {
    let doc = Arc::new(build_document(args));
    let frames: Arc<dyn FrameScheduler> = if args.realtime {
        Arc::new(TokioFrames::new(config.scroll.animation_tick_duration()))
    } else {
        let step_ms = config.scroll.animation_tick_duration().as_secs_f64() * 1000.0;
        Arc::new(SteppedFrames::new(step_ms))
    };

    let locale = Locale::new(args.rtl);
    let instance = create_go_to(&config.scroll.to_overrides(), &locale);
    let options = instance.options().merged(&args.call_overrides());

    let axis = args.axis();
    let start = doc.scroll_position(doc.html(), axis);
    let scope = Scope::new(Arc::clone(&doc), frames).provide(instance);
    let go_to = use_go_to(&scope, GoToOverrides::new())?;

    let target = args.target();
    let settled = if args.horizontal {
        go_to.horizontal(target.clone(), Some(args.call_overrides())).await?
    } else {
        go_to.go(target.clone(), Some(args.call_overrides())).await?
    };

    let frames = doc
        .writes()
        .into_iter()
        .filter(|write| write.axis == axis)
        .enumerate()
        .map(|(i, write)| FrameRecord {
            frame: i + 1,
            position: write.value,
        })
        .collect();

    Ok(SimulationReport {
        target: describe(&target),
        axis: if args.horizontal { "horizontal" } else { "vertical" },
        rtl: args.rtl,
        duration_ms: options.duration_ms,
        easing: options.easing.label().to_string(),
        start,
        frames,
        settled,
    })
}

fn describe(target: &Target) -> String {
    match target {
        Target::Offset(offset) => format!("{}", offset),
        Target::Selector(selector) => selector.clone(),
        other => format!("{:?}", other),
    }
}

pub async fn run(config: &AppConfig, args: SimulateArgs) -> Result<()> {
    let report = simulate(config, &args).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Scrolling {} to {} ({} ms, {}{})",
        report.axis,
        report.target,
        report.duration_ms,
        report.easing,
        if report.rtl { ", rtl" } else { "" }
    );
    println!("  start      {:>10.1}", report.start);
    for record in &report.frames {
        println!("  frame {:>4} {:>10.1}", record.frame, record.position);
    }
    println!("Settled at {} after {} frames", report.settled, report.frames.len());

    Ok(())
}
