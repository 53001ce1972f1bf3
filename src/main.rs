pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    flagdeck::app::run()
}
