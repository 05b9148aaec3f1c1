//! The Dune queries we pull, and the columns we keep from each.

pub const YEAR_MONTH: &str = "年月";
pub const DATE: &str = "日付";
pub const CHAIN: &str = "チェーン";
pub const CUMULATIVE_ISSUANCE: &str = "累積発行額 (億円)";
pub const CUMULATIVE_REDEMPTION: &str = "累積償還額 (億円)";
pub const CUMULATIVE_CIRCULATION: &str = "累積流通額 (億円)";
pub const GLOBAL_CUMULATIVE_ISSUANCE: &str = "全体累積発行額 (億円)";
pub const GLOBAL_CUMULATIVE_REDEMPTION: &str = "全体累積償還額 (億円)";
pub const GLOBAL_CUMULATIVE_CIRCULATION: &str = "全体累積流通額 (億円)";
pub const TOTAL_UNIQUE_USERS: &str = "総累積ユニークユーザー数";

pub const MONTHLY_COLUMNS: [&str; 11] = [
    YEAR_MONTH,
    CHAIN,
    "月次発行額 (億円)",
    "月次償還額 (億円)",
    "月次純増額 (億円)",
    CUMULATIVE_ISSUANCE,
    CUMULATIVE_REDEMPTION,
    CUMULATIVE_CIRCULATION,
    GLOBAL_CUMULATIVE_ISSUANCE,
    GLOBAL_CUMULATIVE_REDEMPTION,
    GLOBAL_CUMULATIVE_CIRCULATION,
];

pub const DAILY_COLUMNS: [&str; 11] = [
    DATE,
    CHAIN,
    "日次発行額 (億円)",
    "日次償還額 (億円)",
    "日次純増額 (億円)",
    CUMULATIVE_ISSUANCE,
    CUMULATIVE_REDEMPTION,
    CUMULATIVE_CIRCULATION,
    "日次新規ユーザー (チェーン別)",
    "累積ユーザー数 (チェーン別)",
    TOTAL_UNIQUE_USERS,
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query<'a> {
    pub name: &'a str,
    pub query_id: i64,
    pub columns: &'a [&'a str],
}

pub const JPYC_MONTHLY: Query<'static> = Query {
    name: "jpyc_monthly",
    query_id: 6603840,
    columns: &MONTHLY_COLUMNS,
};

pub const JPYC_DAILY: Query<'static> = Query {
    name: "jpyc_daily",
    query_id: 6593053,
    columns: &DAILY_COLUMNS,
};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn columns_are_unique_test() {
        for query in [JPYC_MONTHLY, JPYC_DAILY] {
            let unique: HashSet<_> = query.columns.iter().collect();
            assert_eq!(unique.len(), query.columns.len(), "{}", query.name);
        }
    }

    #[test]
    fn report_columns_are_in_schema_test() {
        for column in [
            YEAR_MONTH,
            CHAIN,
            CUMULATIVE_ISSUANCE,
            CUMULATIVE_REDEMPTION,
            CUMULATIVE_CIRCULATION,
            GLOBAL_CUMULATIVE_ISSUANCE,
            GLOBAL_CUMULATIVE_REDEMPTION,
            GLOBAL_CUMULATIVE_CIRCULATION,
        ] {
            assert!(JPYC_MONTHLY.columns.contains(&column));
        }
        assert!(JPYC_DAILY.columns.contains(&DATE));
        assert!(JPYC_DAILY.columns.contains(&TOTAL_UNIQUE_USERS));
    }
}
