use calc_icon::report::{self, DONE_BANNER, START_BANNER};
use calc_icon::{export, generate, IconConfig, LinkedCodecs, Written};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries only the progress lines.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    registry().with(filter).with(fmt::layer().with_writer(std::io::stderr)).init();

    // Checked here as well as in `generate` so the guidance precedes the banner.
    if let Err(err) = export::preflight(&LinkedCodecs) {
        return fail(&err);
    }

    println!("{START_BANNER}");
    let config = IconConfig::default();
    let result = generate(Path::new("."), &config, &LinkedCodecs, |written| match written {
        Written::Icon(_) => println!("{}", report::icon_written(&config.ico_file)),
        Written::Preview(_) => println!("{}", report::preview_written(&config.preview_file)),
    });

    match result {
        Ok(_) => {
            println!("{DONE_BANNER}");
            ExitCode::SUCCESS
        }
        Err(err) => fail(&err),
    }
}

fn fail(err: &calc_icon::IconError) -> ExitCode {
    ExitCode::from(report::report_failure(err, &mut std::io::stdout()))
}
