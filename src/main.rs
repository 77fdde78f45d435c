use std::thread::sleep;
use std::time::Duration;

use hrprofiler::cmd_options::CMDOptions;
use hrprofiler::Timer;

use log::info;

fn run(opts: &CMDOptions) {
  let step = Duration::from_millis(opts.step_millis);
  let mut timer = Timer::new(opts.reference.as_str(), false);
  timer.start();
  info!("Start");
  sleep(step);

  info!("1st step");
  let _ = timer.show_lap_time(None);
  timer.inter_start();
  sleep(step);

  info!("2nd step");
  timer.show_inter_time(Some("inter"), true);
  sleep(step);

  info!("3rd step");
  let _ = timer.end();
  let _ = timer.show_full_time();
}

fn main() {
  let opts = CMDOptions::new(std::env::args().skip(1));
  env_logger::Builder::new()
    .filter_level(opts.level_filter)
    .format_target(opts.format_target)
    .init();
  if !opts.args.is_empty() {
    log::warn!("ignoring extra arguments {:?}", opts.args);
  }
  run(&opts);
}
