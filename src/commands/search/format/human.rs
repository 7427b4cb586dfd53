//! Human-readable output formatting for search reports

use std::io::Write;

use waypath_core::error::Result;
use waypath_core::graph::SearchOutcome;

/// Write one section per outcome: title, path, hop count and distance
pub fn output_human(out: &mut dyn Write, outcomes: &[SearchOutcome<'_>]) -> Result<()> {
    for outcome in outcomes {
        writeln!(out)?;
        writeln!(out, "{}: ", outcome.title())?;
        if outcome.path().is_empty() {
            writeln!(out, "No path found.")?;
        }
        for name in outcome.path_names() {
            writeln!(out, "{}", name)?;
        }
        writeln!(out, "That took {} hops to find.", outcome.hops())?;
        writeln!(out, "Total distance = {} miles.", outcome.total_distance())?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypath_core::graph::{Algorithm, OutcomeStatus, Vertex, VertexId};

    fn render(outcomes: &[SearchOutcome<'_>]) -> String {
        let mut buf = Vec::new();
        output_human(&mut buf, outcomes).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_found_section() {
        let a = Vertex::new(VertexId(0), "Alpha", "XX", 0.0, 0.0);
        let b = Vertex::new(VertexId(1), "Beta", "XX", 3.0, 4.0);
        let outcome = SearchOutcome::assemble(
            Algorithm::Bfs.title(),
            Algorithm::Bfs,
            OutcomeStatus::Found,
            vec![&a, &b],
        );

        assert_eq!(
            render(&[outcome]),
            "\nBreadth-First Search Results: \nAlpha\nBeta\n\
             That took 1 hops to find.\nTotal distance = 500 miles.\n\n"
        );
    }

    #[test]
    fn test_no_path_section() {
        let outcome = SearchOutcome::no_path(Algorithm::AStar.title(), Algorithm::AStar);
        assert_eq!(
            render(&[outcome]),
            "\nA* Search Results: \nNo path found.\n\
             That took 0 hops to find.\nTotal distance = 0 miles.\n\n"
        );
    }
}
