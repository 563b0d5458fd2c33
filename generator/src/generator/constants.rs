pub const COMMENT_OPTION_KEY: &str = "COMMENT";

pub const TYPEDEF_SUFFIX: &str = "_TYPE";
