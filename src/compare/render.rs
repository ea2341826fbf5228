use super::Comparison;
use std::fmt;

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = self.settings.method_a;
        let b = self.settings.method_b;

        write!(
            f,
            "# Compare {} results between {} and {}",
            self.settings.metric.header_noun(),
            a,
            b
        )?;
        if let Some(group) = self.group {
            write!(f, " (group {})", group)?;
        }
        writeln!(f)?;
        writeln!(f, "# Format: pdb_id   {}=...   {}=...   better=...", a, b)?;
        writeln!(f)?;

        for r in &self.records {
            writeln!(
                f,
                "{}\t{}={:.3}\t{}={:.3}\tbetter={}",
                r.id,
                a,
                r.value_a,
                b,
                r.value_b,
                self.winner_label(r.winner)
            )?;
        }

        let s = &self.summary;
        writeln!(f)?;
        writeln!(f, "# Total proteins compared: {}", s.total)?;
        writeln!(
            f,
            "# {} better: {} ({:.1}%)",
            a,
            s.a_better,
            s.percentage(s.a_better)
        )?;
        writeln!(
            f,
            "# {} better: {} ({:.1}%)",
            b,
            s.b_better,
            s.percentage(s.b_better)
        )?;
        if s.ties > 0 {
            writeln!(f, "# tie: {} ({:.1}%)", s.ties, s.percentage(s.ties))?;
        }
        Ok(())
    }
}
