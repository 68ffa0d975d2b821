use clap::Parser;

/// Arguments for run command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Run the unit test suite declared as `unit-tests`:\n    toolhost run unit-tests\n\n\
                  Run the regression tester against another bundle:\n    toolhost run regression --bundle ./assets\n\n\
                  Exit status is 0 on success, the failed-case count (at most 254) when cases fail,\n\
                  255 when the tool fails fatally and 2 when the host cannot start it.")]
pub struct RunArgs {
    /// Name of the tool in the configuration file
    pub tool: String,
}
