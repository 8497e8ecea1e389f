//! Stand-ins for `pip` and `manage.py`.
//!
//! Both append their arguments to `calls.log` in the project root and exit
//! with `PIP_EXIT` / `MANAGE_EXIT` (default 0).

use super::env::TestEnv;

pub const CALL_LOG: &str = "calls.log";

pub const FAKE_PIP: &str = r#"echo "pip $*" >> calls.log
echo "pip output"
exit "${PIP_EXIT:-0}"
"#;

pub const FAKE_MANAGE: &str = r#"echo "manage $*" >> calls.log
if [ -n "$SECRET_KEY" ]; then
    echo "manage SECRET_KEY=$SECRET_KEY" >> calls.log
fi
echo "collected 3 static files"
exit "${MANAGE_EXIT:-0}"
"#;

/// Config routing both steps through the stand-in scripts.
pub const STANDIN_CONFIG: &str = r#"[install]
program = "sh"
args = ["fake_pip.sh", "install", "-r"]

[collect]
python = "sh"
manage = "fake_manage.sh"

[output]
unicode = false
"#;

impl TestEnv {
    /// Project with stand-in scripts, a manifest and `buildprep.toml`.
    pub fn with_standins() -> Self {
        let env = TestEnv::new();
        env.write_project_file("fake_pip.sh", FAKE_PIP);
        env.write_project_file("fake_manage.sh", FAKE_MANAGE);
        env.write_project_file("requirements.txt", "django\n");
        env.write_project_file("buildprep.toml", STANDIN_CONFIG);
        env
    }
}
