fn main() -> anyhow::Result<()> {
    basic2python::run()
}
