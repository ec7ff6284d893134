use super::{ChartConfig, ChartHandle, LegendPosition, RenderTarget};
use crate::error::Result;
use std::io::Write;

const BAR_GLYPHS: [char; 3] = ['#', '=', '+'];
const DEFAULT_WIDTH: usize = 40;

/// Draws charts as horizontal text bars on any writer
pub struct TerminalSurface<W: Write> {
    out: W,
    width: usize,
    next_id: u64,
    live: Option<u64>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self::with_width(out, DEFAULT_WIDTH)
    }

    /// `width` is the length of the longest bar in characters
    pub fn with_width(out: W, width: usize) -> Self {
        Self {
            out,
            width: width.max(1),
            next_id: 0,
            live: None,
        }
    }

    pub fn live_chart(&self) -> Option<u64> {
        self.live
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, config: &ChartConfig) -> std::io::Result<()> {
        let max = config
            .datasets
            .iter()
            .flat_map(|d| d.data.iter())
            .filter(|v| v.is_finite())
            .fold(0.0_f64, |acc, v| acc.max(v.abs()));
        let scale = if max > 0.0 { self.width as f64 / max } else { 0.0 };
        let name_width = config.datasets.iter().map(|d| d.label.len()).max().unwrap_or(0);

        if config.options.legend == LegendPosition::Top {
            self.draw_legend(config)?;
        }

        for (i, label) in config.labels.iter().enumerate() {
            writeln!(self.out, "{label}")?;
            for (dataset, glyph) in config.datasets.iter().zip(BAR_GLYPHS.iter().cycle()) {
                let value = dataset.data.get(i).copied().unwrap_or(0.0);
                let len = if value.is_finite() { (value.abs() * scale).round() as usize } else { 0 };
                let bar: String = std::iter::repeat(*glyph).take(len).collect();
                writeln!(
                    self.out,
                    "  {:<name_width$} |{:<width$}| {:.2}",
                    dataset.label,
                    bar,
                    value,
                    width = self.width
                )?;
            }
        }

        if config.options.legend != LegendPosition::Top {
            self.draw_legend(config)?;
        }
        self.out.flush()
    }

    fn draw_legend(&mut self, config: &ChartConfig) -> std::io::Result<()> {
        let entries: Vec<String> = config
            .datasets
            .iter()
            .zip(BAR_GLYPHS.iter().cycle())
            .map(|(d, g)| format!("{g} {}", d.label))
            .collect();
        writeln!(self.out, "Legend: {}", entries.join("  "))
    }
}

impl<W: Write> RenderTarget for TerminalSurface<W> {
    fn is_attached(&self) -> bool {
        true
    }

    fn create_chart(&mut self, config: &ChartConfig) -> Result<ChartHandle> {
        self.draw(config)?;
        self.next_id += 1;
        self.live = Some(self.next_id);
        Ok(ChartHandle::new(self.next_id))
    }

    fn destroy_chart(&mut self, handle: ChartHandle) {
        if self.live == Some(handle.id()) {
            self.live = None;
        }
    }
}
