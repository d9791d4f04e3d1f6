mod persistence;

pub use persistence::{apply_to_plan_file, export_catalog_csv, load_plan, save_plan};
