use crate::tool::PssHelperTool;

/// Run the pss_helper tool on raw JSON arguments.
pub fn handle_tool(raw_args: &str) -> crate::Result<String> {
    log::debug!("{} invoked with {} byte(s) of arguments", PssHelperTool::NAME, raw_args.len());
    Ok(PssHelperTool.call_json(raw_args)?)
}
