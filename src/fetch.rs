//! Pulls the latest result of a Dune query and stores it as CSV.

use std::path::Path;

use anyhow::Result;
use csv::WriterBuilder;
use tracing::info;

use crate::{dune::DuneApi, queries::Query, row::Row};

/// Writes a header of `columns`, then one record per row with exactly those columns. Columns a
/// row does not have are left empty, fields not in `columns` are dropped.
pub fn write_csv(path: &Path, columns: &[&str], rows: &[Row]) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;

    writer.write_record(columns)?;
    for row in rows {
        writer.write_record(columns.iter().map(|column| row.cell(column)))?;
    }

    writer.flush()?;
    Ok(())
}

/// Fetches the latest result for `query` and writes it to `<name>.csv` in `data_dir`. When Dune
/// has no rows nothing is written. Returns all rows as received, including fields the CSV drops.
pub async fn fetch_and_save(
    dune_api: &impl DuneApi,
    query: &Query<'_>,
    data_dir: &Path,
) -> Result<Vec<Row>> {
    info!("fetching {} (query {})...", query.name, query.query_id);
    let rows = dune_api.get_latest_result(query.query_id).await?;

    if rows.is_empty() {
        info!("no data returned for {}", query.name);
        return Ok(rows);
    }

    let output_path = data_dir.join(format!("{}.csv", query.name));
    write_csv(&output_path, query.columns, &rows)?;

    info!("saved {} rows to {}", rows.len(), output_path.display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use mockall::predicate::*;
    use serde_json::json;
    use tempfile::tempdir;

    use super::*;
    use crate::dune::MockDuneApi;

    const TEST_QUERY: Query<'static> = Query {
        name: "test_query",
        query_id: 42,
        columns: &["date", "chain", "users"],
    };

    #[test]
    fn write_csv_orders_columns_by_schema_test() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("out.csv");
        let rows = vec![
            Row::from(json!({ "users": 3, "extra": "dropped", "date": "2024-01-31", "chain": "Ethereum" })),
            Row::from(json!({ "chain": "Avalanche, C-Chain" })),
        ];

        write_csv(&path, TEST_QUERY.columns, &rows).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "date,chain,users\n2024-01-31,Ethereum,3\n,\"Avalanche, C-Chain\",\n"
        );
    }

    #[test]
    fn write_csv_rows_have_schema_width_test() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("out.csv");
        let rows = vec![
            Row::from(json!({ "date": "2024-01-31" })),
            Row::from(json!({})),
            Row::from(json!({ "unknown": 1 })),
        ];

        write_csv(&path, TEST_QUERY.columns, &rows).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), TEST_QUERY.columns);
        let records = reader.records().collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(records.len(), 3);
        for record in records {
            assert_eq!(record.len(), TEST_QUERY.columns.len());
        }
    }

    #[tokio::test]
    async fn fetch_and_save_test() {
        let temp_dir = tempdir().unwrap();
        let mut mock_dune = MockDuneApi::new();
        let fetched_rows = vec![Row::from(json!({
            "date": "2024-01-31",
            "chain": "Polygon",
            "users": 12345,
            "extra": true,
        }))];
        let expected_rows = fetched_rows.clone();

        mock_dune
            .expect_get_latest_result()
            .with(eq(42))
            .times(1)
            .return_once(move |_| Ok(fetched_rows));

        let rows = fetch_and_save(&mock_dune, &TEST_QUERY, temp_dir.path())
            .await
            .unwrap();

        assert_eq!(rows, expected_rows);
        let content = std::fs::read_to_string(temp_dir.path().join("test_query.csv")).unwrap();
        assert_eq!(content, "date,chain,users\n2024-01-31,Polygon,12345\n");
    }

    #[tokio::test]
    async fn fetch_and_save_empty_test() {
        let temp_dir = tempdir().unwrap();
        let mut mock_dune = MockDuneApi::new();
        mock_dune
            .expect_get_latest_result()
            .times(1)
            .return_once(|_| Ok(vec![]));

        let rows = fetch_and_save(&mock_dune, &TEST_QUERY, temp_dir.path())
            .await
            .unwrap();

        assert!(rows.is_empty());
        assert!(!temp_dir.path().join("test_query.csv").exists());
    }

    #[tokio::test]
    async fn fetch_and_save_propagates_error_test() {
        let temp_dir = tempdir().unwrap();
        let mut mock_dune = MockDuneApi::new();
        mock_dune
            .expect_get_latest_result()
            .times(1)
            .return_once(|_| Err(anyhow::anyhow!("connection refused")));

        let error = fetch_and_save(&mock_dune, &TEST_QUERY, temp_dir.path())
            .await
            .unwrap_err();

        assert_eq!(error.to_string(), "connection refused");
        assert!(!temp_dir.path().join("test_query.csv").exists());
    }
}
