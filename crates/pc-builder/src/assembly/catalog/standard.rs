use super::super::domain::{
    BoardLayout, Motherboard, Part, PartKind, PcieLane, StorageInterface,
};

pub(super) fn standard_motherboard() -> Motherboard {
    let layout = BoardLayout {
        ram_slots: 4,
        pcie_slots: vec![PcieLane::X16, PcieLane::X1, PcieLane::X1, PcieLane::X1],
        m2_slots: 2,
        sata_ports: 6,
    };

    let part = Part::new("mb-1", PartKind::Motherboard, "ASUS ROG B550-F")
        .with_socket("AM4")
        .with_layout(layout.clone())
        .with_price(180);

    Motherboard {
        part,
        socket: "AM4".to_string(),
        layout,
    }
}

pub(super) fn standard_parts(board: &Motherboard) -> Vec<Part> {
    use PartKind::*;

    vec![
        board.part.clone(),
        // CPUs, all AM4
        Part::new("cpu-1", Cpu, "AMD Ryzen 5 5600X").with_socket("AM4").with_price(200),
        Part::new("cpu-3", Cpu, "AMD Ryzen 7 5800X").with_socket("AM4").with_price(350),
        Part::new("cpu-4", Cpu, "AMD Ryzen 9 5900X").with_socket("AM4").with_price(450),
        Part::new("cpu-5", Cpu, "AMD Ryzen 5 3600").with_socket("AM4").with_price(150),
        Part::new("cpu-6", Cpu, "AMD Ryzen 7 3700X").with_socket("AM4").with_price(280),
        // Memory
        Part::new("ram-1", Ram, "Corsair Vengeance 8GB").with_speed("3200MHz").with_price(45),
        Part::new("ram-2", Ram, "G.Skill Ripjaws 8GB").with_speed("3200MHz").with_price(42),
        Part::new("ram-3", Ram, "Corsair Vengeance 16GB").with_speed("3200MHz").with_price(75),
        Part::new("ram-4", Ram, "G.Skill Trident Z 32GB").with_speed("3600MHz").with_price(140),
        Part::new("ram-5", Ram, "Corsair Vengeance RGB 16GB").with_speed("3600MHz").with_price(85),
        // Graphics
        Part::new("gpu-1", Gpu, "NVIDIA GeForce GTX 1660").with_pcie(PcieLane::X16).with_price(250),
        Part::new("gpu-2", Gpu, "NVIDIA RTX 3060").with_pcie(PcieLane::X16).with_price(400),
        Part::new("gpu-3", Gpu, "NVIDIA RTX 3070").with_pcie(PcieLane::X16).with_price(600),
        Part::new("gpu-4", Gpu, "AMD RX 6600 XT").with_pcie(PcieLane::X16).with_price(350),
        // M.2 SSDs
        Part::new("m2-1", Ssd, "Samsung 970 EVO 500GB")
            .with_interface(StorageInterface::M2)
            .with_capacity("500GB")
            .with_price(80),
        Part::new("m2-2", Ssd, "Samsung 980 PRO 1TB")
            .with_interface(StorageInterface::M2)
            .with_capacity("1TB")
            .with_price(150),
        Part::new("m2-3", Ssd, "WD Black SN850 2TB")
            .with_interface(StorageInterface::M2)
            .with_capacity("2TB")
            .with_price(280),
        // SATA SSDs
        Part::new("sata-1", Ssd, "Crucial MX500 1TB")
            .with_interface(StorageInterface::Sata)
            .with_capacity("1TB")
            .with_price(90),
        Part::new("sata-2", Ssd, "Samsung 870 EVO 2TB")
            .with_interface(StorageInterface::Sata)
            .with_capacity("2TB")
            .with_price(180),
        // Hard drives
        Part::new("hdd-1", Hdd, "Seagate Barracuda 2TB")
            .with_interface(StorageInterface::Sata)
            .with_capacity("2TB")
            .with_price(60),
        Part::new("hdd-2", Hdd, "Western Digital Blue 4TB")
            .with_interface(StorageInterface::Sata)
            .with_capacity("4TB")
            .with_price(95),
        // Coolers
        Part::new("cooler-1", Cooler, "Cooler Master Hyper 212").with_price(40),
        Part::new("cooler-2", Cooler, "Noctua NH-D15").with_price(100),
        Part::new("cooler-3", Cooler, "Corsair H100i RGB AIO").with_price(150),
        // PCIe x1 cards
        Part::new("wifi-1", WifiCard, "ASUS WiFi 6 Card").with_pcie(PcieLane::X1).with_price(50),
        Part::new("sound-1", SoundCard, "Creative Sound Blaster Z")
            .with_pcie(PcieLane::X1)
            .with_price(80),
        // Power supplies
        Part::new("psu-1", Psu, "Corsair CX550 (550W)").with_wattage(550).with_price(65),
        Part::new("psu-2", Psu, "EVGA SuperNOVA 750 (750W)").with_wattage(750).with_price(110),
        Part::new("psu-3", Psu, "Seasonic Focus GX-1000 (1000W)")
            .with_wattage(1000)
            .with_price(190),
    ]
}
