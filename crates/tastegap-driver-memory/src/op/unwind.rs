use tastegap_core::{Document, Path, Value};

pub(super) fn execute(rows: Vec<Document>, path: &Path) -> Vec<Document> {
    let mut ret = Vec::with_capacity(rows.len());

    for doc in rows {
        match doc.get_path(path) {
            None | Some(Value::Null) => {}
            Some(Value::List(items)) => {
                for item in items.clone() {
                    let mut row = doc.clone();
                    row.set_path(path, item);
                    ret.push(row);
                }
            }
            // Scalars unwind to themselves
            Some(_) => ret.push(doc),
        }
    }

    ret
}
