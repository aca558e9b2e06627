fn main() -> Result<(), Box<dyn std::error::Error>> {
    astmill_cli::run()
}
