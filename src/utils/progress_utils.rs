use std::io::IsTerminal;

use indicatif::ProgressBar;

/// Progress bar on stderr, `None` when stderr is not a terminal or there is nothing to do.
pub fn progress_bar(len: u64, msg: String) -> Option<ProgressBar> {
    if len == 0 || !std::io::stderr().is_terminal() {
        return None;
    }

    let bar = ProgressBar::new(len);
    bar.set_style(
        indicatif::ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>5}/{len:5} {msg}")
            .ok()?
            .progress_chars("##-")
    );
    bar.set_message(msg);

    Some(bar)
}
