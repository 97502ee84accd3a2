//! CSV rendering of the flat parent table.

use crate::error::{Error, Result};
use crate::model::{OutputRow, TaxonomyGraph};

/// Convert a graph to a CSV table with header `ID,Name,Type,Parent ID`.
///
/// The header is always written, even for an empty graph. A node without a
/// parent gets an empty `Parent ID` field. Records end with CRLF (RFC 4180).
pub fn to_csv(graph: &TaxonomyGraph) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(OutputRow::HEADER)?;
    for row in graph.rows() {
        writer.serialize(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::Csv(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, ContainmentEdge, NodeId, PointRecord, Position};

    #[test]
    fn test_to_csv() {
        let graph = TaxonomyGraph::new(
            vec![
                PointRecord::new(NodeId(0), "Business Area: Retail", Category::BusinessArea, Position::default()),
                PointRecord::new(NodeId(1), "Business Domain: Lending", Category::BusinessDomain, Position::new(10.0, 0.0)),
            ],
            vec![ContainmentEdge::contains(NodeId(0), NodeId(1))],
        );

        let csv = to_csv(&graph).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(
            lines,
            vec![
                "ID,Name,Type,Parent ID",
                "node_0,Business Area: Retail,business_area,",
                "node_1,Business Domain: Lending,business_domain,node_0",
            ]
        );
    }

    #[test]
    fn test_empty_graph_has_header() {
        let csv = to_csv(&TaxonomyGraph::default()).unwrap();
        assert_eq!(csv, "ID,Name,Type,Parent ID\r\n");
    }

    #[test]
    fn test_quotes_labels_with_commas() {
        let graph = TaxonomyGraph::new(
            vec![PointRecord::new(NodeId(0), "Sales, Service", Category::Unknown, Position::default())],
            Vec::new(),
        );
        let csv = to_csv(&graph).unwrap();
        assert!(csv.contains("node_0,\"Sales, Service\",unknown,"));
    }
}
