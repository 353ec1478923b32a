use timeanddate::{extract_weather, ExtractError, WeatherRecord};

const PAGE: &str = r#"<html><body>
<div id="qlook">
  <div class="h2">15&nbsp;°C</div>
  <p>Passing clouds.</p>
  <p>19°CF:14°C / Feels Like: 14 °C, Forecast: 19 °C to 13 °C, Wind: 17 km/h ↑ from West</p>
</div>
<table class="table table--left"><tbody>
  <tr><th>Location:</th><td>London City Airport</td></tr>
  <tr><th>Current Time:</th><td>19 Oct 2026, 14:20:11</td></tr>
  <tr><th>Latest Report:</th><td>19 Oct 2026, 13:50</td></tr>
  <tr><th>Visibility:</th><td>10&nbsp;km</td></tr>
  <tr><th>Pressure:</th><td>1005 mbar</td></tr>
  <tr><th>Humidity:</th><td>82%</td></tr>
  <tr><th>Dew Point:</th><td>12 °C</td></tr>
</tbody></table>
</body></html>"#;

fn main() -> Result<(), ExtractError> {
    env_logger::init();

    let record = extract_weather(PAGE.as_bytes())?;
    for (name, value) in record.fields() {
        let marker = if WeatherRecord::is_available(value) { ' ' } else { '!' };
        println!("{marker} {name:<12} {value}");
    }
    Ok(())
}
