mod rename_rule;

pub(crate) use rename_rule::RenameRule;
