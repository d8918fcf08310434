// Routes module - reads the kernel IPv4 routing table and resolves the default route

pub mod reader;
pub mod resolver;

use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

pub use reader::{RouteRows, read_route_rows};
pub use resolver::DefaultRouteResolver;

/// Where Linux exposes the IPv4 routing table
pub const PROC_NET_ROUTE: &str = "/proc/net/route";

/// One data line of the routing table. Addresses are kept exactly as the
/// kernel stores them: 32-bit words in host (little-endian) byte order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRow {
    pub interface_name: String,
    pub destination: u32,
    pub gateway: u32,
}

impl RouteRow {
    pub fn is_default(&self) -> bool {
        self.destination == 0
    }

    /// Gateway as an address, or `None` when the route has no next hop
    pub fn gateway_address(&self) -> Option<Ipv4Addr> {
        (self.gateway != 0).then(|| decode_gateway(self.gateway))
    }
}

/// The device's active egress, as reported to the ACS
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultRoute {
    pub interface_name: String,
    pub gateway_address: Option<Ipv4Addr>,
}

impl From<RouteRow> for DefaultRoute {
    fn from(row: RouteRow) -> Self {
        let gateway_address = row.gateway_address();
        DefaultRoute {
            interface_name: row.interface_name,
            gateway_address,
        }
    }
}

/// Decode a gateway word read from the table.
///
/// The kernel prints the address in its in-memory order, so the least
/// significant byte of the parsed word is the first dotted octet. That is
/// the same as reading the 8-digit field two digits at a time from its end:
/// `0202000A` decodes to `10.0.2.2`.
pub fn decode_gateway(raw: u32) -> Ipv4Addr {
    Ipv4Addr::from(raw.to_le_bytes())
}
