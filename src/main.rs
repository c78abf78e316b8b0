fn main() {
  if let Err(e) = marathon_planner_lib::run() {
    eprintln!("Error: {}", e);
    std::process::exit(1);
  }
}
