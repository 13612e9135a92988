//! Rich CLI display for a simulation run
//!
//! Renders a [`RunReport`] as a terminal dashboard: energy and enzyme charts,
//! stacked cofactor consumption, metric cards, and the full data table.
//! `print` writes to stderr so stdout remains clean for piping.

use std::io::{self, Write};

use chrono::Local;
use colored::Colorize;

use crate::cli::export::RunReport;
use crate::synthesis::metrics::{progress_fraction, AvailabilityStatus};

const CHART_WIDTH: usize = 40;
const RULE_WIDTH: usize = 72;

const OVERALL_REACTION: &str = "CH3CO-SCoA + 7 malonyl-CoA + 14 NADPH + 14 H+ -> \
                                palmitate + 7 CO2 + 14 NADP+ + 8 HSCoA + 6 H2O";

/// Terminal dashboard for one run
pub struct Dashboard<'a> {
    report: &'a RunReport,
}

impl<'a> Dashboard<'a> {
    /// Create a dashboard over a finished report
    #[must_use]
    pub const fn new(report: &'a RunReport) -> Self {
        Self { report }
    }

    /// Render the full dashboard to stderr
    pub fn print(&self) -> io::Result<()> {
        let stderr = io::stderr();
        let mut out = stderr.lock();
        self.render(&mut out)
    }

    /// Render the full dashboard to any writer
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.render_header(out)?;
        self.render_energy_chart(out)?;
        self.render_consumption_chart(out)?;
        self.render_metrics(out)?;
        self.render_molecule(out)?;
        self.render_reaction_steps(out)?;
        self.render_table(out)?;
        self.render_footer(out)
    }

    fn render_header<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let m = &self.report.metrics;
        let status = if m.cycles_completed > 0 {
            "running".green().bold()
        } else {
            "idle".yellow().bold()
        };
        let clock = self.report.generated_at.with_timezone(&Local);

        writeln!(
            out,
            "\n{} {}",
            "===".bold().cyan(),
            "Fatty-Acid Synthase Simulation".bold().cyan()
        )?;
        writeln!(out, "{}", "─".repeat(RULE_WIDTH).dimmed())?;
        writeln!(
            out,
            "  {} {status} | {} {} | {} {}",
            "Status:".dimmed(),
            "Time:".dimmed(),
            clock.format("%H:%M:%S"),
            "Reactions:".dimmed(),
            m.total_reactions
        )
    }

    fn render_energy_chart<W: Write>(&self, out: &mut W) -> io::Result<()> {
        section(out, "Energy dynamics and enzyme activity")?;
        for rec in self.report.series.iter() {
            let energy = bar_len(rec.energy_level_pct, 100.0, CHART_WIDTH);
            let enzyme = bar_len(rec.enzyme_activity_pct, 100.0, CHART_WIDTH);
            writeln!(
                out,
                "  {:>4} {} {:>6.2}%  (cycle {})",
                rec.carbon_chain_label.bold(),
                pad("█".repeat(energy), CHART_WIDTH).cyan(),
                rec.energy_level_pct,
                rec.cycle_index
            )?;
            writeln!(
                out,
                "  {:>4} {} {:>6.2}%",
                "",
                pad("╌".repeat(enzyme), CHART_WIDTH).yellow(),
                rec.enzyme_activity_pct
            )?;
        }
        writeln!(
            out,
            "  {} energy   {} FAS enzyme activity",
            "█".cyan(),
            "╌".yellow()
        )
    }

    fn render_consumption_chart<W: Write>(&self, out: &mut W) -> io::Result<()> {
        section(out, "Cumulative cofactor consumption")?;
        let last = self.report.series.last();
        let max_total = f64::from(last.atp_consumed + last.nadph_consumed);

        for rec in self.report.series.iter() {
            let atp = bar_len(f64::from(rec.atp_consumed), max_total, CHART_WIDTH);
            let nadph = bar_len(f64::from(rec.nadph_consumed), max_total, CHART_WIDTH);
            writeln!(
                out,
                "  {:>4} {}{}{} ATP {:>2} | NADPH {:>2}",
                rec.carbon_chain_label.bold(),
                "▇".repeat(atp).red(),
                "▇".repeat(nadph).blue(),
                " ".repeat(CHART_WIDTH.saturating_sub(atp + nadph)),
                rec.atp_consumed,
                rec.nadph_consumed
            )?;
        }
        writeln!(out, "  {} ATP   {} NADPH", "▇".red(), "▇".blue())
    }

    fn render_metrics<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let m = &self.report.metrics;
        section(out, "Key metrics")?;
        writeln!(
            out,
            "  {:<22} {} ATP equivalents ({:+.1}%)",
            "Total energy use:".dimmed(),
            m.total_energy_consumption.to_string().bold(),
            m.energy_delta_pct
        )?;
        writeln!(
            out,
            "  {:<22} {}% ({}/{} cycles)",
            "Synthesis efficiency:".dimmed(),
            format!("{:.1}", m.synthesis_efficiency_pct).bold(),
            m.cycles_completed,
            m.cycles_total
        )?;
        writeln!(
            out,
            "  {:<22} {}% {}",
            "ATP availability:".dimmed(),
            m.atp_availability,
            status_label(m.atp_status)
        )?;
        writeln!(
            out,
            "  {:<22} {}% {}",
            "NADPH availability:".dimmed(),
            m.nadph_availability,
            status_label(m.nadph_status)
        )
    }

    fn render_molecule<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mol = &self.report.molecule;
        section(out, "Current fatty-acid chain")?;
        writeln!(
            out,
            "  {} {} | {} {} | {} {:.1} Da",
            "Carbons:".dimmed(),
            mol.carbon_atoms,
            "Double bonds:".dimmed(),
            mol.double_bonds,
            "Weight:".dimmed(),
            f64::from(mol.molecular_weight_da)
        )?;
        writeln!(out, "  H3C-(CH2)n-COOH, n = {}", mol.repeat_units)?;
        writeln!(out, "  Structure: {}", mol.formula.bold())?;
        writeln!(
            out,
            "  Class: {} | {}/{} elongation cycles completed",
            mol.class, self.report.metrics.cycles_completed, self.report.metrics.cycles_total
        )
    }

    fn render_reaction_steps<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.report.reaction_steps.is_empty() {
            return Ok(());
        }
        section(out, "Reactions per cycle")?;
        for (i, step) in self.report.reaction_steps.iter().enumerate() {
            writeln!(out, "  {} {step}", format!("{}.", i + 1).cyan())?;
        }
        Ok(())
    }

    fn render_table<W: Write>(&self, out: &mut W) -> io::Result<()> {
        section(out, "Detailed data")?;
        writeln!(
            out,
            "  {}",
            format!(
                "{:>5} {:>5} {:>7} {:>10} {:>4} {:>6} {:>8} {:>10}",
                "cycle", "chain", "carbons", "energy(%)", "ATP", "NADPH", "time", "enzyme(%)"
            )
            .bold()
        )?;
        for rec in self.report.series.iter() {
            writeln!(
                out,
                "  {:>5} {:>5} {:>7} {:>10.2} {:>4} {:>6} {:>8.1} {:>10.1}",
                rec.cycle_index,
                rec.carbon_chain_label,
                rec.carbon_atom_count,
                rec.energy_level_pct,
                rec.atp_consumed,
                rec.nadph_consumed,
                rec.reaction_time,
                rec.enzyme_activity_pct
            )?;
        }
        Ok(())
    }

    fn render_footer<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let m = &self.report.metrics;
        writeln!(out, "{}", "─".repeat(RULE_WIDTH).dimmed())?;
        writeln!(
            out,
            "  {} | {} {}°C | pH 7.0-7.4",
            "FAS complex: multifunctional enzyme".dimmed(),
            "Temperature:".dimmed(),
            m.temperature_c
        )?;
        writeln!(out, "  {} {OVERALL_REACTION}", "Overall:".dimmed())?;

        let fraction = progress_fraction(m.cycles_completed);
        let filled = bar_len(fraction, 1.0, CHART_WIDTH);
        writeln!(
            out,
            "  [{}{}] {}/{} cycles\n",
            "#".repeat(filled).green(),
            "-".repeat(CHART_WIDTH - filled).dimmed(),
            m.cycles_completed,
            m.cycles_total
        )
    }
}

/// Print a section heading
fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "\n  {}", title.bold().underline())
}

/// Colored availability label
fn status_label(status: AvailabilityStatus) -> colored::ColoredString {
    if status.is_ok() {
        status.label().green()
    } else {
        status.label().red().bold()
    }
}

/// Number of bar cells for `value` on a `0..=max` scale of `width` cells
fn bar_len(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || !value.is_finite() {
        return 0;
    }
    let ratio = (value / max).clamp(0.0, 1.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let cells = (ratio * width as f64).round() as usize;
    cells.min(width)
}

/// Right-pad `s` with spaces to `width` characters
fn pad(s: String, width: usize) -> String {
    format!("{s:<width$}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesis::config::SimulationConfig;
    use crate::synthesis::perturbation::ScriptedPerturbation;
    use crate::synthesis::series::generate;

    fn report(cycles: u32) -> RunReport {
        let mut config = SimulationConfig::default();
        config.simulation.cycles = cycles;
        let series = generate(
            i64::from(cycles),
            config.simulation.initial_energy,
            config.simulation.energy_variation,
            &mut ScriptedPerturbation::new([5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0]),
        )
        .unwrap();
        RunReport::new(config, series)
    }

    fn render(report: &RunReport) -> String {
        let mut buf = Vec::new();
        Dashboard::new(report).render(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_bar_len_scaling() {
        assert_eq!(bar_len(0.0, 100.0, 40), 0);
        assert_eq!(bar_len(50.0, 100.0, 40), 20);
        assert_eq!(bar_len(100.0, 100.0, 40), 40);
        assert_eq!(bar_len(150.0, 100.0, 40), 40);
        assert_eq!(bar_len(-5.0, 100.0, 40), 0);
    }

    #[test]
    fn test_bar_len_zero_max() {
        assert_eq!(bar_len(3.0, 0.0, 40), 0);
        assert_eq!(bar_len(f64::NAN, 10.0, 40), 0);
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad("ab".to_string(), 4), "ab  ");
        assert_eq!(pad("abcd".to_string(), 2), "abcd");
    }

    #[test]
    fn test_render_contains_every_row() {
        let text = render(&report(7));
        for label in ["C2", "C4", "C6", "C8", "C10", "C12", "C14", "C16"] {
            assert!(text.contains(label), "missing {label} in dashboard");
        }
        assert!(text.contains("CH3(CH2)14COOH"));
        assert!(text.contains("Condensation"));
        assert!(text.contains("55.00"));
    }

    #[test]
    fn test_render_idle_skips_reaction_steps() {
        let text = render(&report(0));
        assert!(!text.contains("Reactions per cycle"));
        assert!(text.contains("C2"));
        assert!(text.contains("0/7 cycles"));
    }

    #[test]
    fn test_print_does_not_panic() {
        Dashboard::new(&report(3)).print().unwrap();
    }
}
