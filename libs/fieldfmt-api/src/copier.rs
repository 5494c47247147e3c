use crate::schema::Schema;
use crate::value::Row;

/// Copies same-named fields from rows of one schema into rows of another.
///
/// Built once per stream from the two schemas; `copy` only walks the
/// precomputed index pairs.
#[derive(Debug, Clone)]
pub struct RecordCopier {
    /// `(source index, target index)`.
    pairs: Vec<(usize, usize)>,
}

impl RecordCopier {
    /// Pair up every target field that also exists in `source`, skipping
    /// the names in `exclude` (fields the caller fills itself).
    pub fn new(source: &Schema, target: &Schema, exclude: &[&str]) -> Self {
        let pairs = target
            .fields
            .iter()
            .enumerate()
            .filter(|(_, f)| !exclude.iter().any(|name| f.is_named(name)))
            .filter_map(|(dst, f)| source.index_of(&f.name).map(|src| (src, dst)))
            .collect();
        Self { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn copy(&self, dst: &mut Row, src: &Row) {
        for &(s, d) in &self.pairs {
            dst.set(d, src.get(s).clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Field, FieldType};
    use crate::value::Value;

    #[test]
    fn copies_shared_fields_and_leaves_excluded_alone() {
        let source = Schema::new(vec![
            Field::new("a", FieldType::Int64),
            Field::text("b", FieldType::VString, 10),
        ]);
        let target = source
            .with_appended(Field::text("c", FieldType::VWString, 10))
            .unwrap();
        let copier = RecordCopier::new(&source, &target, &["c"]);
        assert_eq!(copier.len(), 2);

        let src = Row(vec![Value::Int64(1), Value::String("x".into())]);
        let mut dst = Row::nulls(target.len());
        dst.set(2, Value::String("keep".into()));
        copier.copy(&mut dst, &src);

        assert_eq!(
            dst.0,
            vec![Value::Int64(1), Value::String("x".into()), Value::String("keep".into())]
        );
    }
}
