use crate::stats::{CounterPair, StatsAggregator};
use std::fmt;

pub const DEFAULT_INDENT_WIDTH: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces per nesting level.
    pub indent_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

impl StatsAggregator {
    /// Renders the accumulated counters as a text report.
    ///
    /// - no charms: empty string
    /// - one charm: a single block titled with the charm name
    /// - several charms: a `Global` block, then every charm under `Per Charm`
    ///   in first-seen order
    pub fn render(&self, options: &RenderOptions) -> String {
        let mut out = String::new();

        match self.charm_count() {
            0 => {}
            1 => {
                // The global counters equal the only charm's counters here.
                if let Some((name, _)) = self.charms().next() {
                    render_block(&mut out, name, self.global(), 0, options);
                }
            }
            _ => {
                render_block(&mut out, "Global", self.global(), 0, options);

                out.push_str("\nPer Charm:\n");
                for (name, pair) in self.charms() {
                    render_block(&mut out, name, pair, 1, options);
                }
            }
        }

        out
    }
}

impl fmt::Display for StatsAggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderOptions::default()))
    }
}

fn render_block(
    out: &mut String,
    title: &str,
    pair: &CounterPair,
    depth: usize,
    options: &RenderOptions,
) {
    let indent = " ".repeat(depth * options.indent_width);
    let inner = " ".repeat((depth + 1) * options.indent_width);

    out.push_str(&format!("{indent}{title}:\n"));

    for (severity, count) in pair.all().iter() {
        out.push_str(&format!(
            "{inner}{severity}: {count}{}\n",
            duplicates_note(pair.duplicates().get(severity))
        ));
    }

    out.push_str(&format!(
        "{inner}TOTAL: {}{}\n",
        pair.all().total(),
        duplicates_note(pair.duplicates().total())
    ));
}

fn duplicates_note(count: u64) -> String {
    if count > 0 {
        format!(" ({count} duplicates)")
    } else {
        String::new()
    }
}
