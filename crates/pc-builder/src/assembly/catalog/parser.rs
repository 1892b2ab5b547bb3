use super::super::domain::{BoardLayout, Part, PartId, PartKind, PcieLane, StorageInterface};
use super::CatalogError;
use serde::{Deserialize, Deserializer, Serialize};
use std::io::{Read, Write};
use std::str::FromStr;

const SLOT_SEPARATOR: char = '|';

/// Flat CSV row. Every optional column may be left blank.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogRow {
    id: String,
    kind: String,
    name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    socket: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    interface: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pcie_type: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    capacity: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    speed: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    wattage: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    price: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    ram_slots: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pcie_slots: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    m2_slots: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    sata_ports: Option<String>,
}

impl CatalogRow {
    fn into_part(self, row: usize) -> Result<Part, CatalogError> {
        let invalid = |reason: String| CatalogError::InvalidRow { row, reason };

        if self.id.trim().is_empty() {
            return Err(invalid("part id is empty".to_string()));
        }
        let kind = PartKind::from_str(&self.kind).map_err(invalid)?;

        let layout = if kind == PartKind::Motherboard {
            Some(BoardLayout {
                ram_slots: parse_number(self.ram_slots.as_deref(), "ram_slots", row)?
                    .unwrap_or(0),
                pcie_slots: self
                    .pcie_slots
                    .as_deref()
                    .map(|raw| {
                        raw.split(SLOT_SEPARATOR)
                            .filter(|lane| !lane.trim().is_empty())
                            .map(PcieLane::from_str)
                            .collect::<Result<Vec<_>, _>>()
                    })
                    .transpose()
                    .map_err(invalid)?
                    .unwrap_or_default(),
                m2_slots: parse_number(self.m2_slots.as_deref(), "m2_slots", row)?.unwrap_or(0),
                sata_ports: parse_number(self.sata_ports.as_deref(), "sata_ports", row)?
                    .unwrap_or(0),
            })
        } else {
            None
        };

        Ok(Part {
            id: PartId::new(self.id.trim()),
            kind,
            name: self.name.trim().to_string(),
            socket: self.socket,
            interface: self
                .interface
                .as_deref()
                .map(StorageInterface::from_str)
                .transpose()
                .map_err(invalid)?,
            pcie_type: self
                .pcie_type
                .as_deref()
                .map(PcieLane::from_str)
                .transpose()
                .map_err(invalid)?,
            capacity: self.capacity,
            speed: self.speed,
            wattage: parse_number(self.wattage.as_deref(), "wattage", row)?,
            price: parse_number(self.price.as_deref(), "price", row)?,
            layout,
        })
    }

    fn from_part(part: &Part) -> Self {
        let layout = part.layout.as_ref();
        Self {
            id: part.id.to_string(),
            kind: part.kind.to_string(),
            name: part.name.clone(),
            socket: part.socket.clone(),
            interface: part.interface.map(|interface| interface.to_string()),
            pcie_type: part.pcie_type.map(|lane| lane.to_string()),
            capacity: part.capacity.clone(),
            speed: part.speed.clone(),
            wattage: part.wattage.map(|watts| watts.to_string()),
            price: part.price.map(|price| price.to_string()),
            ram_slots: layout.map(|layout| layout.ram_slots.to_string()),
            pcie_slots: layout.map(|layout| {
                layout
                    .pcie_slots
                    .iter()
                    .map(|lane| lane.as_str())
                    .collect::<Vec<_>>()
                    .join("|")
            }),
            m2_slots: layout.map(|layout| layout.m2_slots.to_string()),
            sata_ports: layout.map(|layout| layout.sata_ports.to_string()),
        }
    }
}

pub(super) fn parse_parts<R: Read>(reader: R) -> Result<Vec<Part>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut parts = Vec::new();

    for (index, record) in csv_reader.deserialize::<CatalogRow>().enumerate() {
        let row = record?;
        // Header is line 1, so data rows start at 2.
        parts.push(row.into_part(index + 2)?);
    }

    Ok(parts)
}

pub(super) fn write_parts<W: Write>(parts: &[Part], writer: W) -> Result<(), CatalogError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for part in parts {
        csv_writer.serialize(CatalogRow::from_part(part))?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn parse_number<T: FromStr>(
    raw: Option<&str>,
    column: &str,
    row: usize,
) -> Result<Option<T>, CatalogError> {
    raw.map(|value| {
        value
            .trim()
            .parse::<T>()
            .map_err(|_| CatalogError::InvalidRow {
                row,
                reason: format!("{column} '{value}' is not a whole number"),
            })
    })
    .transpose()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,kind,name,socket,interface,pcie_type,capacity,speed,wattage,price,ram_slots,pcie_slots,m2_slots,sata_ports";

    #[test]
    fn parses_board_layout_and_legacy_kind_names() {
        let csv = format!(
            "{HEADER}\n\
             mb-x,motherboard,Test Board,LGA1700,,,,,,150,2,x16|x1,1,4\n\
             wifi-x,wifi,Legacy WiFi,,,x1,,,,30,,,,\n"
        );

        let parts = parse_parts(csv.as_bytes()).expect("csv parses");
        assert_eq!(parts.len(), 2);

        let layout = parts[0].layout.as_ref().expect("board layout present");
        assert_eq!(layout.ram_slots, 2);
        assert_eq!(layout.pcie_slots, vec![PcieLane::X16, PcieLane::X1]);
        assert_eq!(layout.sata_ports, 4);

        assert_eq!(parts[1].kind, PartKind::WifiCard);
        assert_eq!(parts[1].pcie_type, Some(PcieLane::X1));
        assert_eq!(parts[1].socket, None);
    }

    #[test]
    fn reports_row_number_for_bad_numbers() {
        let csv = format!("{HEADER}\npsu-x,psu,Bad PSU,,,,,,lots,50,,,,\n");

        match parse_parts(csv.as_bytes()) {
            Err(CatalogError::InvalidRow { row, reason }) => {
                assert_eq!(row, 2);
                assert!(reason.contains("wattage"));
            }
            other => panic!("expected invalid row, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_interfaces() {
        let csv = format!("{HEADER}\nssd-x,ssd,Odd SSD,,U.2,,1TB,,,99,,,,\n");
        assert!(matches!(
            parse_parts(csv.as_bytes()),
            Err(CatalogError::InvalidRow { .. })
        ));
    }
}
