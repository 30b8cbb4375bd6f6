#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    BillPayment,
    Conversion,
    Withdrawal,
}

impl TransactionKind {
    /// `+` for money in, `-` for money out, nothing for conversions.
    pub fn sign(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "+",
            TransactionKind::Withdrawal | TransactionKind::BillPayment => "-",
            TransactionKind::Conversion => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockTransaction {
    pub id: &'static str,
    pub kind: TransactionKind,
    /// Pre-formatted amount.
    pub amount: &'static str,
    pub currency: &'static str,
    pub date: &'static str,
    pub description: &'static str,
}

impl MockTransaction {
    /// `+₦ 50,000`, `0.001 BTC`, ...
    pub fn display_amount(&self) -> String {
        if self.currency == "NGN" {
            format!("{}₦ {}", self.kind.sign(), self.amount)
        } else {
            format!("{}{} {}", self.kind.sign(), self.amount, self.currency)
        }
    }
}

pub const MOCK_TRANSACTIONS: [MockTransaction; 5] = [
    MockTransaction {
        id: "1",
        kind: TransactionKind::Deposit,
        amount: "50,000",
        currency: "NGN",
        date: "2 hours ago",
        description: "Deposit from Bank",
    },
    MockTransaction {
        id: "2",
        kind: TransactionKind::BillPayment,
        amount: "5,000",
        currency: "NGN",
        date: "Yesterday",
        description: "Airtime Purchase",
    },
    MockTransaction {
        id: "3",
        kind: TransactionKind::Conversion,
        amount: "0.001",
        currency: "BTC",
        date: "3 days ago",
        description: "Converted to Naira",
    },
    MockTransaction {
        id: "4",
        kind: TransactionKind::Deposit,
        amount: "0.005",
        currency: "BTC",
        date: "5 days ago",
        description: "Bitcoin Deposit",
    },
    MockTransaction {
        id: "5",
        kind: TransactionKind::Withdrawal,
        amount: "20,000",
        currency: "NGN",
        date: "1 week ago",
        description: "Withdrawal to Bank",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naira_amounts_carry_symbol_and_sign() {
        assert_eq!(MOCK_TRANSACTIONS[0].display_amount(), "+₦ 50,000");
        assert_eq!(MOCK_TRANSACTIONS[1].display_amount(), "-₦ 5,000");
        assert_eq!(MOCK_TRANSACTIONS[4].display_amount(), "-₦ 20,000");
    }

    #[test]
    fn crypto_amounts_carry_currency_suffix() {
        assert_eq!(MOCK_TRANSACTIONS[2].display_amount(), "0.001 BTC");
        assert_eq!(MOCK_TRANSACTIONS[3].display_amount(), "+0.005 BTC");
    }
}
