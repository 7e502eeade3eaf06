#[cfg(test)]
pub mod fixtures {
    pub const SMALL_MAP: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<list>
  <city>
    <name>Gdansk</name>
    <iata>GDN</iata>
    <connected>
      <city><iata>LTN</iata></city>
      <city><iata>BVA</iata></city>
    </connected>
  </city>
  <city>
    <name>London Luton</name>
    <iata>LTN</iata>
    <connected>
      <city><iata>GDN</iata></city>
      <city><iata>ABZ</iata></city>
    </connected>
  </city>
  <city>
    <name>Paris Beauvais</name>
    <iata>BVA</iata>
    <connected>
      <city><iata>GDN</iata></city>
    </connected>
  </city>
</list>
"#;

    pub const EXTRA_ELEMENTS: &str = r#"<list>
  <city>
    <name>  Katowice </name>
    <iata>KTW</iata>
    <latitude>50.474</latitude>
    <longitude>19.080</longitude>
    <connected>
      <city>
        <iata>DTM</iata>
        <operatedBy>W6</operatedBy>
      </city>
    </connected>
  </city>
  <city>
    <iata>DTM</iata>
  </city>
</list>
"#;

    pub const INTERLEAVED_ELEMENTS: &str = r#"<list>
  <city>
    <name>Alpha</name>
    <iata>AAA</iata>
    <connected>
      <city><iata>BBB</iata></city>
      <note/>
      <city><iata>CCC</iata></city>
    </connected>
  </city>
  <version>1</version>
  <city>
    <name>Bravo</name>
    <iata>BBB</iata>
    <connected>
      <city><iata>AAA</iata></city>
    </connected>
  </city>
</list>
"#;

    pub const EMPTY_CONNECTED: &str = r#"<list>
  <city>
    <name>Lonely</name>
    <iata>LNY</iata>
    <connected/>
  </city>
</list>
"#;

    pub const EMPTY_LIST: &str = "<list></list>";

    pub const MALFORMED: &str = r#"<list>
  <city>
    <name>Broken</name>
    <iata>BRK</iata>
  </list>
"#;
}
