use anyhow::{Result, ensure};
use clap::Parser;
use range_slider::{
    DrawCommand, Orientation, Px, PxRect, PxSize, RangeSlider, RangeSliderArgs, RecordingCanvas,
    Stroke, ValueOrdering, Widget,
};

mod session;

#[derive(Parser)]
#[command(name = "range-slider-demo")]
#[command(version, about = "Scripted pointer session on a dual-handle range slider", long_about = None)]
struct Cli {
    /// Lower bound of the range
    #[arg(long, default_value_t = -500, allow_negative_numbers = true)]
    minimum: i32,
    /// Upper bound of the range
    #[arg(long, default_value_t = 31, allow_negative_numbers = true)]
    maximum: i32,
    /// Travel axis: horizontal, vertical, h or v
    #[arg(short, long, default_value_t = Orientation::Horizontal)]
    orientation: Orientation,
    /// Widget width in pixels (default depends on orientation)
    #[arg(long)]
    width: Option<i32>,
    /// Widget height in pixels (default depends on orientation)
    #[arg(long)]
    height: Option<i32>,
    /// Clamp each value setter against the other value
    #[arg(long)]
    strict_ordering: bool,
}

impl Cli {
    fn size(&self) -> PxSize {
        let (width, height) = match self.orientation {
            Orientation::Horizontal => (200, 21),
            Orientation::Vertical => (21, 200),
        };
        PxSize::new(
            Px(self.width.unwrap_or(width)),
            Px(self.height.unwrap_or(height)),
        )
    }

    fn value_ordering(&self) -> ValueOrdering {
        if self.strict_ordering {
            ValueOrdering::Strict
        } else {
            ValueOrdering::Unchecked
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut slider = RangeSlider::with_args(
        RangeSliderArgs::default()
            .orientation(cli.orientation)
            .value_ordering(cli.value_ordering()),
    );
    slider
        .lower_value_changed()
        .connect(|value| println!("New lower value: {value}"));
    slider
        .upper_value_changed()
        .connect(|value| println!("New upper value: {value}"));
    slider
        .range_changed()
        .connect(|(minimum, maximum)| println!("New range: {minimum} {maximum}"));

    let size = cli.size();
    let hint = slider.minimum_size_hint();
    ensure!(
        size.width >= hint.width && size.height >= hint.height,
        "a {} slider needs at least {}x{} pixels, got {}x{}",
        cli.orientation,
        hint.width.raw(),
        hint.height.raw(),
        size.width.raw(),
        size.height.raw(),
    );
    slider.resize(size);
    slider.set_range(cli.minimum, cli.maximum);

    session::run(&mut slider);

    let mut canvas = RecordingCanvas::new();
    slider.on_paint(&mut canvas, size);
    println!("Painted {} commands:", canvas.len());
    for command in canvas.commands() {
        println!("  {}", describe(command));
    }
    Ok(())
}

fn describe(command: &DrawCommand) -> String {
    let (shape, rect, fill, stroke, antialiased) = match *command {
        DrawCommand::RoundedRect {
            rect,
            radius,
            fill,
            stroke,
            antialiased,
        } => (
            format!("rounded rect r={radius}"),
            rect,
            fill,
            stroke,
            antialiased,
        ),
        DrawCommand::Rect {
            rect,
            fill,
            stroke,
            antialiased,
        } => ("rect".to_string(), rect, fill, stroke, antialiased),
    };
    format!(
        "{shape} {} fill {fill}{}{}",
        describe_rect(rect),
        stroke.map(describe_stroke).unwrap_or_default(),
        if antialiased { " antialiased" } else { "" },
    )
}

fn describe_rect(rect: PxRect) -> String {
    format!(
        "[{}, {}, {}x{}]",
        rect.x, rect.y, rect.width, rect.height
    )
}

fn describe_stroke(stroke: Stroke) -> String {
    format!(" stroke {} {}px", stroke.color, stroke.width)
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("warn,range_slider=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("warn"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
