pub fn print_help() {
    println!("qpass {}", env!("CARGO_PKG_VERSION"));
    println!("Password generator fed by a simulated quantum random bit source");
    println!();
    println!("USAGE:");
    println!("  qpass [OPTIONS]");
    println!();
    println!("Passwords use a-z, A-Z, 0-9 and !$^*() and contain characters");
    println!("from at least three of those four groups.");
    println!();
    println!("OPTIONS:");
    println!("  -l, --length <N>        Characters per password (default: 16)");
    println!("  -n, --number <N>        How many to generate. With --bytes, this is the");
    println!("                          byte count and supports K/M/G suffixes.");
    println!("      --max-attempts <N>  Give up after N rejected candidates");
    println!("  -u, --urandom           Use the OS random device instead of the simulator");
    println!("      --seed <N>          Seed the simulator for reproducible output");
    println!("      --bytes             Output raw random bytes from the selected source");
    println!("  -b, --board             Copy to clipboard instead of printing");
    println!("  -q, --quiet             Suppress warnings and notices");
    println!("  -h, --help              Display this help message");
    println!("  -v, --version           Display version");
    println!();
    println!("ENVIRONMENT:");
    println!("  RUST_LOG                Log filter for stderr diagnostics (default: warn)");
    println!();
    println!("EXAMPLES:");
    println!("  qpass                   One 16-character password");
    println!("  qpass -l 24 -n 3        Three passwords, 24 characters each");
    println!("  qpass --bytes -n 1M     1MB of simulator output to stdout");
}
