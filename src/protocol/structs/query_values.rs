use std::collections::BTreeMap;

/// Keys iterate sorted, values of one key keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryValues {
    pub(crate) values: BTreeMap<String, Vec<String>>,
}
