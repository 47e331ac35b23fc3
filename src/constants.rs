pub const MAKEFILE_NAME: &str = "Makefile";

pub const OVERRIDE_VAR: &str = "TM_MAKE_FILE";
pub const PROJECT_DIR_VAR: &str = "TM_PROJECT_DIRECTORY";
pub const CURRENT_DIR_VAR: &str = "TM_DIRECTORY";
