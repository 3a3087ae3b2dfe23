/// General knowledge questions shipped with the app, in study order.
pub(super) const BUILTIN_CARDS: [(&str, &str); 20] = [
    ("What is the capital of France?", "Paris"),
    ("Who wrote \"To Kill a Mockingbird\"?", "Harper Lee"),
    ("What is the largest planet in our solar system?", "Jupiter"),
    ("Who painted the Mona Lisa?", "Leonardo da Vinci"),
    ("What is the smallest country in the world?", "Vatican City"),
    ("What is the chemical symbol for gold?", "Au"),
    ("Who invented the telephone?", "Alexander Graham Bell"),
    ("What is the longest river in the world?", "Nile River"),
    ("What year did World War II end?", "1945"),
    ("What is the hardest natural substance on Earth?", "Diamond"),
    ("Who developed the theory of relativity?", "Albert Einstein"),
    ("What is the largest mammal in the world?", "Blue Whale"),
    ("In which country would you find the ancient city of Petra?", "Jordan"),
    ("What is the currency of Japan?", "Yen"),
    ("Who wrote 'Romeo and Juliet'?", "William Shakespeare"),
    ("What is the tallest mountain in the world?", "Mount Everest"),
    ("What gas do plants absorb from the atmosphere?", "Carbon Dioxide"),
    ("Who was the first person to walk on the moon?", "Neil Armstrong"),
    ("What is the smallest unit of matter?", "Atom"),
    ("In which ocean is the Bermuda Triangle located?", "Atlantic Ocean"),
];
