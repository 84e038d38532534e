fn main() {
    sequencer_report::cli::run();
}
