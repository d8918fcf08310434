// Default route resolution over the kernel routing table

use super::{DefaultRoute, PROC_NET_ROUTE, RouteRow, read_route_rows};
use crate::error::{CoreError, CoreResult};
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};

/// Answers "what is my default route?" from a routing table file.
///
/// Every query re-reads the table. The first row with a zero destination
/// wins; metrics are not compared.
#[derive(Debug, Clone)]
pub struct DefaultRouteResolver {
    table_path: PathBuf,
}

impl Default for DefaultRouteResolver {
    fn default() -> Self {
        DefaultRouteResolver::new(PROC_NET_ROUTE)
    }
}

impl DefaultRouteResolver {
    pub fn new(table_path: impl Into<PathBuf>) -> Self {
        DefaultRouteResolver {
            table_path: table_path.into(),
        }
    }

    pub fn table_path(&self) -> &Path {
        &self.table_path
    }

    /// Interface carrying the default route
    pub fn default_interface(&self) -> CoreResult<String> {
        self.resolve().map(|route| route.interface_name)
    }

    /// Gateway of the default route.
    ///
    /// `Ok(None)` means there is no gateway to report: either the default
    /// route has a zero gateway field or there is no default route at all.
    pub fn default_gateway(&self) -> CoreResult<Option<Ipv4Addr>> {
        let gateway = self.find_default_row()?.and_then(|row| row.gateway_address());
        tracing::debug!("Default gateway: {:?}", gateway);
        Ok(gateway)
    }

    /// Interface and gateway from a single read of the table
    pub fn resolve(&self) -> CoreResult<DefaultRoute> {
        let row = self.find_default_row()?.ok_or_else(|| {
            CoreError::NotFound(format!("default route in {}", self.table_path.display()))
        })?;
        let route = DefaultRoute::from(row);
        tracing::debug!(
            "Default route via {} gateway {:?}",
            route.interface_name,
            route.gateway_address
        );
        Ok(route)
    }

    fn find_default_row(&self) -> CoreResult<Option<RouteRow>> {
        for row in read_route_rows(&self.table_path)? {
            let row = row?;
            if row.is_default() {
                return Ok(Some(row));
            }
        }
        Ok(None)
    }
}
