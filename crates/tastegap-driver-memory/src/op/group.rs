use tastegap_core::{
    query::{Accumulator, Group, GROUP_KEY},
    Document, Value,
};

#[derive(Debug)]
struct Bucket {
    key: Value,
    count: u64,
    sums: Vec<(f64, u64)>,
}

/// Groups rows by key, keeping groups in order of first appearance.
pub(super) fn execute(rows: Vec<Document>, group: &Group) -> Vec<Document> {
    let mut buckets = Vec::<Bucket>::new();

    for doc in &rows {
        let key = doc.get_path(&group.key).cloned().unwrap_or_default();

        let index = match buckets.iter().position(|b| b.key.eq_stored(&key)) {
            Some(index) => index,
            None => {
                buckets.push(Bucket {
                    key,
                    count: 0,
                    sums: vec![(0.0, 0); group.accumulators.len()],
                });
                buckets.len() - 1
            }
        };

        let bucket = &mut buckets[index];
        bucket.count += 1;

        for ((_, accumulator), (sum, n)) in group.accumulators.iter().zip(&mut bucket.sums) {
            if let Accumulator::Avg(path) = accumulator {
                if let Some(value) = doc.get_path(path).and_then(Value::as_f64) {
                    *sum += value;
                    *n += 1;
                }
            }
        }
    }

    buckets
        .into_iter()
        .map(|bucket| {
            let mut row = Document::new().with(GROUP_KEY, bucket.key);

            for ((field, accumulator), (sum, n)) in group.accumulators.iter().zip(bucket.sums) {
                let value = match accumulator {
                    Accumulator::Count => Value::from(bucket.count),
                    Accumulator::Avg(_) if n == 0 => Value::Null,
                    Accumulator::Avg(_) => Value::F64(sum / n as f64),
                };
                row.insert(field.clone(), value);
            }

            row
        })
        .collect()
}
