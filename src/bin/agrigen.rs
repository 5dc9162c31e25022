fn main() -> Result<(), Box<dyn std::error::Error>> {
    agrigen::cli::run()
}
