use serde::{Deserialize, Serialize};

/// Procurement order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Approved,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Stored and displayed code
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Approved => "Approved",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// All statuses in workflow order
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pending,
            OrderStatus::Approved,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Pending" => Some(OrderStatus::Pending),
            "Approved" => Some(OrderStatus::Approved),
            "Delivered" => Some(OrderStatus::Delivered),
            "Cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// Counted in the simulated monetary total
    pub fn is_billable(&self) -> bool {
        matches!(self, OrderStatus::Approved | OrderStatus::Delivered)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Status select of the orders table: "all" or one status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn code(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.code(),
        }
    }

    /// Unknown codes read as "all"
    pub fn from_code(code: &str) -> Self {
        OrderStatus::from_code(code)
            .map(StatusFilter::Only)
            .unwrap_or(StatusFilter::All)
    }

    pub fn accepts(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(OrderStatus::from_code("Shipped"), None);
    }

    #[test]
    fn test_serialized_as_plain_string() {
        let json = serde_json::to_string(&OrderStatus::Delivered).unwrap();
        assert_eq!(json, "\"Delivered\"");
    }

    #[test]
    fn test_status_filter() {
        assert_eq!(StatusFilter::from_code("all"), StatusFilter::All);
        assert!(StatusFilter::All.accepts(OrderStatus::Cancelled));
        let pending = StatusFilter::from_code("Pending");
        assert!(pending.accepts(OrderStatus::Pending));
        assert!(!pending.accepts(OrderStatus::Approved));
        assert_eq!(pending.code(), "Pending");
    }
}
