//! Console rendering of solved fleet plans

use busplan_algo::FleetPlan;
use std::io::{self, Write};
use tabwriter::TabWriter;

/// Write the assignment table followed by the fleet totals.
///
/// The table has one line per (route, shift) and one column per bus type.
/// Totals follow: buses of each type over the whole plan, buses of each type
/// in use per shift, and the objective value.
pub fn write_plan_report<W: Write>(writer: W, plan: &FleetPlan) -> io::Result<()> {
    let mut tw = TabWriter::new(writer);

    write!(tw, "Route\tShift")?;
    for name in &plan.bus_types {
        write!(tw, "\t{} Buses", name)?;
    }
    writeln!(tw)?;
    for row in &plan.rows {
        write!(tw, "{}\t{}", row.route, row.shift.number())?;
        for n in &row.buses {
            write!(tw, "\t{}", n)?;
        }
        writeln!(tw)?;
    }
    tw.flush()?;

    let mut out = tw
        .into_inner()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    writeln!(out)?;
    for (name, total) in plan.bus_types.iter().zip(plan.total_by_type()) {
        writeln!(out, "Total {} buses used: {}", name, total)?;
    }
    writeln!(out)?;
    for usage in &plan.shift_usage {
        let parts: Vec<String> = plan
            .bus_types
            .iter()
            .zip(&usage.buses)
            .map(|(name, n)| format!("{} buses used = {}", name, n))
            .collect();
        writeln!(out, "{}: {}", usage.shift, parts.join(", "))?;
    }
    writeln!(out)?;
    writeln!(out, "Total cost: {:.2}", plan.total_cost)?;
    Ok(())
}
