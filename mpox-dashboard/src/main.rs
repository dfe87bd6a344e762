fn main() {
    mpox_dashboard::run_app();
}
