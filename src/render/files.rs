//! Writing output documents to a directory.
//!
//! Each file is rendered fully in memory and written in one call.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::{AreaCatalog, TaxonomyGraph};

use super::{area_edges_json, area_nodes_json, to_csv, to_json, RenderOptions};

/// Write the CSV table and the graph document into `dir`.
///
/// Returns the written paths, table first.
pub fn write_structure<P: AsRef<Path>>(
    graph: &TaxonomyGraph,
    dir: P,
    options: &RenderOptions,
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let table_path = dir.join(&options.table_file);
    fs::write(&table_path, to_csv(graph)?)?;

    let graph_path = dir.join(&options.graph_file);
    fs::write(&graph_path, to_json(graph, options.json_format)?)?;

    log::debug!("wrote {} and {}", table_path.display(), graph_path.display());
    Ok(vec![table_path, graph_path])
}

/// Write the node-list and edge-list documents of every area into `dir`.
///
/// Returns the written paths in catalog order, nodes before edges per area.
/// Areas whose identifier cannot serve as a file name are skipped with a
/// warning, so nothing is ever written outside `dir`.
pub fn write_area_documents<P: AsRef<Path>>(
    catalog: &AreaCatalog,
    dir: P,
    options: &RenderOptions,
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(catalog.len() * 2);
    for bundle in catalog.iter() {
        let Some(names) = bundle.file_names() else {
            log::warn!("skipping area with unsafe identifier {:?}", bundle.area_id);
            continue;
        };

        let nodes_path = dir.join(&names.nodes);
        fs::write(&nodes_path, area_nodes_json(bundle, options.json_format)?)?;
        written.push(nodes_path);

        let edges_path = dir.join(&names.edges);
        fs::write(&edges_path, area_edges_json(bundle, options.json_format)?)?;
        written.push(edges_path);
    }

    log::debug!("wrote {} area documents to {}", written.len(), dir.display());
    Ok(written)
}
