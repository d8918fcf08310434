// Routing table reader for the /proc/net/route text format

use super::RouteRow;
use crate::error::CoreResult;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::iter::Skip;
use std::path::Path;

/// Lazy sequence of rows from a routing table, in table order.
///
/// The header line is skipped. Lines that do not describe a route (too few
/// columns, non-hex destination) are dropped so that stray lines do not
/// spoil the rest of the table. A read error is yielded once and ends the
/// sequence. When reading from a file, the handle closes when this drops.
pub struct RouteRows<R> {
    lines: Skip<Lines<R>>,
    failed: bool,
}

impl<R: BufRead> RouteRows<R> {
    pub fn new(reader: R) -> Self {
        RouteRows {
            lines: reader.lines().skip(1),
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for RouteRows<R> {
    type Item = CoreResult<RouteRow>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        for line in self.lines.by_ref() {
            match line {
                Ok(line) => {
                    if let Some(row) = parse_row(&line) {
                        return Some(Ok(row));
                    }
                }
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e.into()));
                }
            }
        }

        None
    }
}

/// Open the routing table at `path` and stream its rows
pub fn read_route_rows(path: &Path) -> CoreResult<RouteRows<BufReader<File>>> {
    tracing::debug!("Reading routing table from {}", path.display());
    let file = File::open(path)?;
    Ok(RouteRows::new(BufReader::new(file)))
}

/// Parse one data line: `Iface Destination Gateway [Flags ...]`
fn parse_row(line: &str) -> Option<RouteRow> {
    let mut fields = line.split_whitespace();
    let (Some(iface), Some(dest), Some(gw)) = (fields.next(), fields.next(), fields.next()) else {
        if !line.trim().is_empty() {
            tracing::trace!("Skipping short routing table line: {:?}", line);
        }
        return None;
    };

    let Ok(destination) = u32::from_str_radix(dest, 16) else {
        tracing::trace!("Skipping route with non-hex destination {:?}", dest);
        return None;
    };
    // An unreadable gateway leaves the route usable, just without a next hop
    let gateway = u32::from_str_radix(gw, 16).unwrap_or_else(|_| {
        tracing::trace!("Treating non-hex gateway {:?} on {} as unset", gw, iface);
        0
    });

    Some(RouteRow {
        interface_name: iface.to_string(),
        destination,
        gateway,
    })
}
